mod cli;
mod config;
mod extract;
mod refine;
mod report;

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands, ReportArgs};
use config::ScribeConfig;
use refine::OpenAiRefiner;

fn main() -> Result<()> {
    let raw_args: Vec<String> = std::env::args().collect();

    // ── Bare-path detection (before clap parsing) ───────────────────
    if raw_args.len() == 2 {
        let candidate = Path::new(&raw_args[1]);
        // If the single argument is an existing file AND not a known
        // subcommand, treat it as a drag-and-dropped results file.
        let known_commands = [
            "report", "init", "help", "-h", "--help", "-V", "--version", "-v", "--verbose",
            "-q", "--quiet",
        ];
        if candidate.is_file() && !known_commands.contains(&raw_args[1].as_str()) {
            init_logging("nuclei_scribe=info");
            info!("nuclei-scribe v{}", env!("CARGO_PKG_VERSION"));
            return run_report(&ReportArgs::bare(candidate.to_path_buf()));
        }
    }

    // ── Normal clap flow ────────────────────────────────────────────
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "nuclei_scribe=debug"
    } else if cli.quiet {
        "nuclei_scribe=error"
    } else {
        "nuclei_scribe=info"
    };
    init_logging(filter);

    info!("nuclei-scribe v{}", env!("CARGO_PKG_VERSION"));

    match &cli.command {
        Commands::Report(args) => run_report(args),
        Commands::Init => config::init_config(),
    }
}

fn init_logging(directive: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directive))
        .with_target(false)
        .without_time()
        .try_init(); // try_init to avoid panic if already initialised
}

/// The whole pipeline for one run: extract, render, optionally refine,
/// write, summarize.
fn run_report(args: &ReportArgs) -> Result<()> {
    let config = if args.no_config {
        ScribeConfig::default()
    } else {
        std::env::current_dir()
            .ok()
            .and_then(|cwd| ScribeConfig::load(&cwd))
            .unwrap_or_default()
    };

    info!("Starting report generation for {}", args.input.display());

    let findings = extract::parse_results(&args.input);
    if findings.is_empty() {
        println!("No issues to report.");
        info!("No issues found; exiting.");
        return Ok(());
    }

    let now = Local::now();
    let draft = report::markdown::render(&findings, now.date_naive());

    let final_report = if args.no_refine || !config.refine.enabled {
        info!("Skipping refinement as requested.");
        draft
    } else {
        match OpenAiRefiner::from_env(&config.refine) {
            Ok(refiner) => refine::refine_or_original(&refiner, &draft),
            Err(e) => {
                warn!("{}; skipping refinement", e);
                eprintln!(
                    "{} {}; using original report.",
                    "Warning:".yellow().bold(),
                    e
                );
                draft
            }
        }
    };

    let Some(output_path) = resolve_output_path(args, &config, &now) else {
        return Ok(());
    };

    if let Err(e) = std::fs::write(&output_path, &final_report) {
        error!("Failed to save report: {}", e);
        eprintln!(
            "{} Failed to save report to {}: {}",
            "Error:".red().bold(),
            output_path.display(),
            e
        );
        return Ok(());
    }

    info!("Report saved to {}", output_path.display());
    report::terminal::render(&findings, &output_path);

    Ok(())
}

/// Pick the output path: the explicit `-o` argument wins; otherwise a
/// timestamp-named file, placed in the configured output directory when one
/// is set (created on demand). Returns None when that directory cannot be
/// created, after reporting the failure.
fn resolve_output_path(
    args: &ReportArgs,
    config: &ScribeConfig,
    now: &DateTime<Local>,
) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }

    let name = format!("nuclei_report_{}.md", now.format("%Y%m%d_%H%M%S"));
    match &config.report.output_dir {
        Some(dir) => {
            if let Err(e) = std::fs::create_dir_all(dir) {
                error!("Failed to create output directory {}: {}", dir.display(), e);
                eprintln!(
                    "{} Failed to save report to {}: {}",
                    "Error:".red().bold(),
                    dir.join(&name).display(),
                    e
                );
                return None;
            }
            Some(dir.join(name))
        }
        None => Some(PathBuf::from(name)),
    }
}
