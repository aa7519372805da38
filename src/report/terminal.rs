use std::path::Path;

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, Table};
use owo_colors::OwoColorize;

use crate::report::finding::{Finding, ReportSummary};

/// Print the post-write summary: where the report landed plus a severity
/// breakdown table.
pub fn render(findings: &[Finding], output_path: &Path) {
    let summary = ReportSummary::from_findings(findings);

    println!();
    println!(
        "{}  Report saved to {}",
        "📄".bold(),
        output_path.display().to_string().green()
    );
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Severity", "Count"]);

    let counts = [
        ("Critical", summary.critical, Color::Red),
        ("High", summary.high, Color::Yellow),
        ("Medium", summary.medium, Color::Blue),
        ("Low", summary.low, Color::White),
        ("Unknown", summary.unknown, Color::DarkGrey),
    ];
    for (label, count, color) in counts {
        if count > 0 {
            table.add_row(vec![Cell::new(label).fg(color), Cell::new(count)]);
        }
    }

    println!("{table}");
    println!(
        " {} issue{} written",
        summary.total.to_string().bold(),
        if summary.total != 1 { "s" } else { "" }
    );
    println!();
}
