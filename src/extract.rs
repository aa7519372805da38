use std::path::Path;

use serde_json::Value;
use tracing::{error, info, warn};

use crate::report::finding::{Finding, Severity};

/// Placeholder for fields the scan did not populate
const PLACEHOLDER: &str = "N/A";

/// Parse a Nuclei JSON results file into normalized findings.
///
/// Never fails: an unreadable file or malformed content is reported on the
/// console, logged, and yields an empty list. Record order is preserved;
/// records without a non-empty `info.name` are skipped, not fatal.
pub fn parse_results(path: &Path) -> Vec<Finding> {
    info!("Parsing JSON file: {}", path.display());

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            error!("Cannot read {}: {}", path.display(), e);
            eprintln!("Error: cannot read {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    // The official schema puts an array of result objects at the root.
    let results: Vec<Value> = match serde_json::from_str(&raw) {
        Ok(results) => results,
        Err(e) => {
            error!("Invalid JSON in {}: {}", path.display(), e);
            eprintln!(
                "Error: {} is not a valid Nuclei JSON report.",
                path.display()
            );
            return Vec::new();
        }
    };

    let findings = extract_findings(&results);
    info!(
        "Parsed {} findings from {} results",
        findings.len(),
        results.len()
    );
    findings
}

/// Normalize raw result records, skipping those without a usable name.
fn extract_findings(results: &[Value]) -> Vec<Finding> {
    results.iter().filter_map(finding_from_result).collect()
}

fn finding_from_result(result: &Value) -> Option<Finding> {
    let name = result
        .get("info")
        .and_then(|info| info.get("name"))
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty());

    let Some(name) = name else {
        warn!("Skipping result with missing 'info.name': {}", result);
        return None;
    };

    // The name lookup succeeded, so `info` is an object.
    let info = &result["info"];

    let severity = Severity::from_str(
        info.get("severity")
            .and_then(Value::as_str)
            .unwrap_or("unknown"),
    );

    let references: Vec<String> = info
        .get("reference")
        .and_then(Value::as_array)
        .map(|refs| {
            refs.iter()
                .filter_map(Value::as_str)
                .map(str::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let mut recommendation = severity.base_recommendation().to_string();
    if !references.is_empty() {
        recommendation.push_str(&format!(" See references: {}", references.join(", ")));
    }

    Some(Finding {
        name: name.to_string(),
        severity,
        description: text_or_placeholder(info.get("description")),
        host: text_or_placeholder(result.get("host")),
        matched_at: text_or_placeholder(result.get("matched-at")),
        references,
        kind: text_or_placeholder(result.get("type")),
        timestamp: text_or_placeholder(result.get("timestamp")),
        recommendation,
    })
}

/// Coalesce an optional JSON value to its string content, or the placeholder
/// when the key is absent or the value is not a string. One rule for every
/// optional field.
fn text_or_placeholder(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(str::to_owned)
        .unwrap_or_else(|| PLACEHOLDER.to_owned())
}
