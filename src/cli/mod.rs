pub mod commands;

use clap::Parser;

pub use commands::{Commands, ReportArgs};

/// nuclei-scribe — Nuclei report generator
///
/// Reads a Nuclei JSON results file and writes a readable markdown report
/// with severity-tiered remediation advice.
#[derive(Parser, Debug)]
#[command(
    name = "nuclei-scribe",
    version,
    about = "📄 nuclei-scribe — Turns Nuclei JSON output into a readable report",
    long_about = "nuclei-scribe turns raw Nuclei JSON scan output into a markdown report:\nan executive summary, per-finding details, and remediation recommendations.\n\nWith OPENAI_API_KEY set, the draft is polished by an LLM before saving;\nwithout it (or with --no-refine) the draft is saved as-is."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}
