//! CLI for the Zephyr to Xray migrator.
//!
//! Reads the migration config, moves every matching Zephyr test into Xray
//! through bulk imports and prints what was created.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use zephyr_xray_migrator::{RunSummary, Runner, RunnerConfig, RunnerError};

/// Zephyr to Xray migrator - Copy Zephyr Squad tests into Xray Cloud.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file (.yml, .yaml or .toml).
    #[arg(short, long, env = "MIGRATOR_CONFIG", default_value = "config.yml")]
    config: PathBuf,

    /// Run verbosely (log requests, responses and built tests).
    #[arg(short, long)]
    verbose: bool,

    /// Preview the tests without creating them in Xray.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose);

    // Run the main logic
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);

            if summary.nothing_found() {
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG`, falling back to `debug` with
///   `--verbose` and `info` otherwise
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let config = RunnerConfig::new(args.config, args.dry_run);
    let mut runner = Runner::new(config)?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Batches: {}", summary.batches);
    println!("  Source issues fetched: {}", summary.issues_fetched);
    println!("  Issues skipped (no steps): {}", summary.issues_skipped);
    println!("  Tests prepared: {}", summary.tests_prepared);
    if summary.interrupted_batches > 0 {
        println!(
            "  Batches interrupted by source errors: {}",
            summary.interrupted_batches
        );
    }

    if !summary.dry_run {
        println!("  Tests migrated: {}", summary.tests_migrated);
        if summary.has_failures() {
            println!("  Tests not migrated: {}", summary.tests_failed);
        }
        if !summary.created_keys.is_empty() {
            println!("  Created: {}", summary.created_keys.join(","));
        }
    }
}
