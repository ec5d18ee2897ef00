//! CLI entry point for the podfetch tool.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use podfetch_core::{HttpClient, RunConfig, run};
use tracing::{debug, error, info};

mod cli;

use cli::Args;

fn main() -> Result<ExitCode> {
    // Parse CLI arguments first (before tracing, so --help works without logs).
    // A missing or malformed flag prints usage and exits with code 2 here.
    let args = Args::parse();

    init_tracing(&args);
    debug!(?args, "CLI arguments parsed");

    let config = args.to_run_config();

    // Every request is awaited in turn; one thread is all the pipeline needs.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    Ok(runtime.block_on(execute(&config)))
}

fn init_tracing(args: &Args) {
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn execute(config: &RunConfig) -> ExitCode {
    let client = HttpClient::new();

    match run(config, &client).await {
        Ok(summary) => {
            let bytes: u64 = summary.downloaded.iter().map(|f| f.bytes).sum();
            info!(
                found = summary.found,
                selected = summary.selected.len(),
                downloaded = summary.downloaded.len(),
                bytes,
                dry_run = config.dry_run(),
                "Done"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
