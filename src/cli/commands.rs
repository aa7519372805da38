use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a markdown report from a Nuclei JSON results file
    Report(ReportArgs),

    /// Initialize a .nuclei-scribe.toml config file in the current directory
    Init,
}

#[derive(clap::Args, Debug)]
pub struct ReportArgs {
    /// Path to the Nuclei JSON results file
    pub input: PathBuf,

    /// Write the report to this path
    /// (default: nuclei_report_YYYYMMDD_HHMMSS.md)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip LLM refinement and save the draft report as-is
    #[arg(long)]
    pub no_refine: bool,

    /// Ignore .nuclei-scribe.toml config files
    #[arg(long)]
    pub no_config: bool,
}

impl ReportArgs {
    /// Arguments for a bare-path invocation: everything defaulted except
    /// the input file.
    pub fn bare(input: PathBuf) -> Self {
        ReportArgs {
            input,
            output: None,
            no_refine: false,
            no_config: false,
        }
    }
}
