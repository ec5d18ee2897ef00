//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use podfetch_core::{DEFAULT_FEED_URL, RunConfig, SelectionOrder};

/// Download podcast episodes published after a given date.
///
/// Podfetch reads an RSS feed, keeps the episodes published after --since,
/// and saves up to --max of their audio files into --dest.
#[derive(Parser, Debug)]
#[command(name = "podfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Only episodes published after this date are downloaded (YYYY-MM-DD)
    #[arg(short = 's', long, value_name = "YYYY-MM-DD")]
    pub since: NaiveDate,

    /// Maximum number of files to download
    #[arg(short = 'm', long = "max", value_name = "N")]
    pub max_files: usize,

    /// Folder where the files are stored (created if missing)
    #[arg(short = 'd', long = "dest", value_name = "PATH")]
    pub output_dir: PathBuf,

    /// RSS feed to read episodes from
    #[arg(long, value_name = "URL", default_value = DEFAULT_FEED_URL)]
    pub feed_url: String,

    /// Keep the most recent episodes instead of the oldest ones after --since
    #[arg(long)]
    pub newest: bool,

    /// List the selected episodes without downloading anything
    #[arg(long)]
    pub dry_run: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Freezes the parsed arguments into the run configuration.
    pub fn to_run_config(&self) -> RunConfig {
        let order = if self.newest {
            SelectionOrder::Newest
        } else {
            SelectionOrder::Oldest
        };
        RunConfig::new(self.since, self.max_files, self.output_dir.clone())
            .with_feed_url(self.feed_url.clone())
            .with_order(order)
            .with_dry_run(self.dry_run)
    }
}
