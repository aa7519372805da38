/// Severity level of a scan finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    /// Nuclei templates may omit severity or carry a value outside the
    /// known set; both normalize here.
    Unknown,
}

impl Severity {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => Severity::Critical,
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
            Severity::Unknown => "Unknown",
        }
    }

    /// Base remediation advice for this severity tier.
    pub fn base_recommendation(&self) -> &'static str {
        match self {
            Severity::Critical | Severity::High => {
                "Review vendor documentation and apply patches."
            }
            Severity::Medium => "Assess impact and update configurations.",
            Severity::Low | Severity::Unknown => "Monitor and consider mitigation.",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single normalized finding, extracted from one Nuclei result record
#[derive(Debug, Clone)]
pub struct Finding {
    /// Vulnerability name from `info.name` (required; records without it
    /// never become findings)
    pub name: String,

    /// Severity level
    pub severity: Severity,

    /// Human-readable description
    pub description: String,

    /// Host the template matched against
    pub host: String,

    /// Where the match was detected (`matched-at` in the raw record)
    pub matched_at: String,

    /// Reference URLs / advisory IDs, in input order (possibly empty)
    pub references: Vec<String>,

    /// Template type, e.g. "http" or "dns" (`type` in the raw record)
    pub kind: String,

    /// Detection timestamp, kept as the raw string
    pub timestamp: String,

    /// Derived remediation text: severity-tiered advice plus the reference
    /// list when references exist
    pub recommendation: String,
}

/// Per-severity counts over a finding list
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub total: usize,
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl ReportSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = ReportSummary {
            total: findings.len(),
            critical: 0,
            high: 0,
            medium: 0,
            low: 0,
            unknown: 0,
        };
        for f in findings {
            match f.severity {
                Severity::Critical => summary.critical += 1,
                Severity::High => summary.high += 1,
                Severity::Medium => summary.medium += 1,
                Severity::Low => summary.low += 1,
                Severity::Unknown => summary.unknown += 1,
            }
        }
        summary
    }
}
