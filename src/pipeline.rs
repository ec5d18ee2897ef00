//! The fetch, parse, select and download sequence behind one run.

use thiserror::Error;
use tracing::{info, instrument};

use crate::config::RunConfig;
use crate::download::{DownloadError, DownloadedFile, HttpClient, download_episodes};
use crate::episode::Episode;
use crate::feed::{FeedError, fetch_feed, parse_feed};
use crate::selector::select_episodes;

/// Process exit code for network failures.
pub const EXIT_NETWORK: u8 = 3;
/// Process exit code for feed XML or date parse failures.
pub const EXIT_PARSE: u8 = 4;
/// Process exit code for local filesystem failures.
pub const EXIT_FILESYSTEM: u8 = 5;

/// Failure of a pipeline stage. Every failure ends the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The feed could not be retrieved.
    #[error("failed to fetch feed: {0}")]
    Fetch(#[source] DownloadError),

    /// The feed could not be parsed.
    #[error("failed to parse feed: {0}")]
    Parse(#[from] FeedError),

    /// An episode could not be downloaded or written.
    #[error("failed to download episode: {0}")]
    Download(#[source] DownloadError),
}

impl PipelineError {
    /// Maps the failure onto the process exit code taxonomy.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) => EXIT_PARSE,
            Self::Fetch(e) | Self::Download(e) if e.is_filesystem() => EXIT_FILESYSTEM,
            Self::Fetch(_) | Self::Download(_) => EXIT_NETWORK,
        }
    }
}

/// What a completed run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Complete episodes found in the feed.
    pub found: usize,
    /// Episodes chosen for download, newest first.
    pub selected: Vec<Episode>,
    /// Files written; empty on a dry run.
    pub downloaded: Vec<DownloadedFile>,
    /// Whether the output folder was created by this run.
    pub created_output_dir: bool,
}

/// Runs the whole pipeline once: fetch the feed, parse it, select the
/// episodes, then download them one by one.
///
/// # Errors
///
/// Returns the first [`PipelineError`]; nothing after the failing stage runs.
#[instrument(skip_all, fields(feed = %config.feed_url()))]
pub async fn run(config: &RunConfig, client: &HttpClient) -> Result<RunSummary, PipelineError> {
    let xml = fetch_feed(client, config.feed_url())
        .await
        .map_err(PipelineError::Fetch)?;

    info!("Parsing....");
    let episodes = parse_feed(&xml)?;
    let found = episodes.len();
    info!("Found {found} items.");

    let selected = select_episodes(
        episodes,
        config.since(),
        config.max_files(),
        config.order(),
    );
    info!(
        since = %config.since(),
        order = %config.order(),
        "Selected {} of {found} items.",
        selected.len()
    );

    if config.dry_run() {
        for episode in &selected {
            info!("Would download {} ({})", episode.media_url(), episode.publication_date());
        }
        return Ok(RunSummary {
            found,
            selected,
            ..RunSummary::default()
        });
    }

    let report = download_episodes(client, &selected, config.output_dir())
        .await
        .map_err(PipelineError::Download)?;

    Ok(RunSummary {
        found,
        selected,
        downloaded: report.files,
        created_output_dir: report.created_output_dir,
    })
}
