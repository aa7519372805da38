use chrono::NaiveDate;

use crate::report::finding::{Finding, ReportSummary};

/// Render the full markdown report: executive summary, per-finding issue
/// sections, and remediation recommendations.
///
/// The report date is a parameter so the output is a pure function of its
/// inputs. Callers guarantee a non-empty finding list; section and field
/// labels are fixed literals so reports stay greppable across runs.
pub fn render(findings: &[Finding], generated_on: NaiveDate) -> String {
    let summary = ReportSummary::from_findings(findings);

    let executive_summary = format!(
        "This report summarizes findings from a Nuclei security scan conducted on {}. \
         Found {} issue{}, including {} critical. \
         Prioritize remediation for high-severity issues.",
        generated_on.format("%Y-%m-%d"),
        summary.total,
        if summary.total != 1 { "s" } else { "" },
        summary.critical,
    );

    let mut issues_section = String::from("\n\n## Issues\n");
    for finding in findings {
        issues_section.push_str(&format!("\n### {}\n", finding.name));
        issues_section.push_str(&format!("- **Severity**: {}\n", finding.severity));
        issues_section.push_str(&format!("- **Type**: {}\n", finding.kind));
        issues_section.push_str(&format!("- **Description**: {}\n", finding.description));
        issues_section.push_str(&format!("- **Host**: {}\n", finding.host));
        issues_section.push_str(&format!("- **Matched At**: {}\n", finding.matched_at));
        issues_section.push_str(&format!("- **Timestamp**: {}\n", finding.timestamp));
        issues_section.push_str(&format!(
            "- **Recommendation**: {}\n",
            finding.recommendation
        ));
        if !finding.references.is_empty() {
            issues_section.push_str(&format!(
                "- **References**: {}\n",
                finding.references.join(", ")
            ));
        }
    }

    let mut remediation_section = String::from("\n\n## Remediation Recommendations\n");
    for finding in findings {
        remediation_section.push_str(&format!(
            "\n### {} ({})\n",
            finding.name, finding.severity
        ));
        remediation_section.push_str(&format!("- {}\n", finding.recommendation));
    }

    format!("{executive_summary}\n{issues_section}\n{remediation_section}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::finding::Severity;

    fn report_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 12).unwrap()
    }

    fn make_finding(name: &str, severity: Severity, references: &[&str]) -> Finding {
        let mut recommendation = severity.base_recommendation().to_string();
        if !references.is_empty() {
            recommendation.push_str(&format!(" See references: {}", references.join(", ")));
        }
        Finding {
            name: name.to_string(),
            severity,
            description: "N/A".to_string(),
            host: "N/A".to_string(),
            matched_at: "N/A".to_string(),
            references: references.iter().map(|r| r.to_string()).collect(),
            kind: "N/A".to_string(),
            timestamp: "N/A".to_string(),
            recommendation,
        }
    }

    #[test]
    fn golden_single_finding_report() {
        let finding = Finding {
            name: "Exposed Admin Panel".to_string(),
            severity: Severity::High,
            description: "Admin panel reachable without auth".to_string(),
            host: "https://example.test".to_string(),
            matched_at: "https://example.test/admin".to_string(),
            references: vec!["CVE-2024-0001".to_string()],
            kind: "http".to_string(),
            timestamp: "2025-04-12T08:00:00Z".to_string(),
            recommendation:
                "Review vendor documentation and apply patches. See references: CVE-2024-0001"
                    .to_string(),
        };

        let expected = "This report summarizes findings from a Nuclei security scan conducted on 2025-04-12. Found 1 issue, including 0 critical. Prioritize remediation for high-severity issues.


## Issues

### Exposed Admin Panel
- **Severity**: High
- **Type**: http
- **Description**: Admin panel reachable without auth
- **Host**: https://example.test
- **Matched At**: https://example.test/admin
- **Timestamp**: 2025-04-12T08:00:00Z
- **Recommendation**: Review vendor documentation and apply patches. See references: CVE-2024-0001
- **References**: CVE-2024-0001



## Remediation Recommendations

### Exposed Admin Panel (High)
- Review vendor documentation and apply patches. See references: CVE-2024-0001
";

        assert_eq!(render(&[finding], report_date()), expected);
    }

    #[test]
    fn render_is_idempotent_for_a_fixed_date() {
        let findings = vec![
            make_finding("A", Severity::Critical, &["CVE-1"]),
            make_finding("B", Severity::Low, &[]),
        ];
        let first = render(&findings, report_date());
        let second = render(&findings, report_date());
        assert_eq!(first, second);
    }

    #[test]
    fn summary_pluralizes_issue_count() {
        let one = render(&[make_finding("A", Severity::Low, &[])], report_date());
        assert!(one.contains("Found 1 issue,"), "report={one}");

        let two = render(
            &[
                make_finding("A", Severity::Low, &[]),
                make_finding("B", Severity::Low, &[]),
            ],
            report_date(),
        );
        assert!(two.contains("Found 2 issues,"), "report={two}");
    }

    #[test]
    fn summary_counts_critical_findings() {
        let findings = vec![
            make_finding("A", Severity::Critical, &[]),
            make_finding("B", Severity::Critical, &[]),
            make_finding("C", Severity::High, &[]),
        ];
        let report = render(&findings, report_date());
        assert!(
            report.contains("Found 3 issues, including 2 critical."),
            "report={report}"
        );
    }

    #[test]
    fn references_line_only_when_references_exist() {
        let with_refs = render(
            &[make_finding("A", Severity::High, &["CVE-1", "CVE-2"])],
            report_date(),
        );
        assert!(
            with_refs.contains("- **References**: CVE-1, CVE-2"),
            "report={with_refs}"
        );

        let without_refs = render(&[make_finding("A", Severity::High, &[])], report_date());
        assert!(
            !without_refs.contains("- **References**"),
            "report={without_refs}"
        );
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let findings = vec![
            make_finding("First", Severity::Low, &[]),
            make_finding("Second", Severity::High, &[]),
        ];
        let report = render(&findings, report_date());

        let issues = report.find("## Issues").expect("issues section");
        let remediation = report
            .find("## Remediation Recommendations")
            .expect("remediation section");
        assert!(issues < remediation, "report={report}");

        // Finding order is preserved inside each section.
        let first = report.find("### First").expect("first issue");
        let second = report.find("### Second").expect("second issue");
        assert!(first < second, "report={report}");

        assert!(report.contains("### First (Low)"), "report={report}");
        assert!(report.contains("### Second (High)"), "report={report}");
    }
}
