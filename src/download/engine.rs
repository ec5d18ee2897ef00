//! Sequential download of the selected episodes.
//!
//! Episodes are fetched one at a time, in the order given. The first failure
//! aborts the whole batch; there is no skip-and-continue and no retry.
//!
//! # Example
//!
//! ```no_run
//! use podfetch_core::download::{HttpClient, download_episodes};
//! use podfetch_core::Episode;
//! use std::path::Path;
//!
//! # async fn example(episodes: Vec<Episode>) -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let report = download_episodes(&client, &episodes, Path::new("./episodes")).await?;
//! println!("Downloaded {} files ({} bytes)", report.files.len(), report.total_bytes());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use tracing::{debug, info, instrument};

use super::client::{DownloadedFile, HttpClient};
use super::error::DownloadError;
use crate::episode::Episode;

/// Outcome of a [`download_episodes`] batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Files written, in download order.
    pub files: Vec<DownloadedFile>,
    /// Whether the output folder had to be created during this batch.
    pub created_output_dir: bool,
}

impl DownloadReport {
    /// Returns the number of bytes written across all files.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|f| f.bytes).sum()
    }
}

/// Creates `dir` if it does not exist yet.
///
/// Only the last path component is created; a missing parent is reported
/// as an IO error. Returns `true` when the folder was created by this call.
///
/// # Errors
///
/// Returns [`DownloadError::Io`] if the folder cannot be created.
pub async fn ensure_output_dir(dir: &Path) -> Result<bool, DownloadError> {
    let exists = tokio::fs::try_exists(dir)
        .await
        .map_err(|e| DownloadError::io(dir, e))?;
    if exists {
        return Ok(false);
    }

    let shown = std::path::absolute(dir).unwrap_or_else(|_| dir.to_path_buf());
    info!("Folder {} doesn't exist. Creating it...", shown.display());
    tokio::fs::create_dir(dir)
        .await
        .map_err(|e| DownloadError::io(dir, e))?;
    Ok(true)
}

/// Downloads every episode into `output_dir`, strictly one after another.
///
/// The folder is checked before each file, so it is created right before
/// the first write when missing.
///
/// # Errors
///
/// Returns the first [`DownloadError`] hit; files already written stay on
/// disk.
#[instrument(skip(client, episodes), fields(count = episodes.len(), dir = %output_dir.display()))]
pub async fn download_episodes(
    client: &HttpClient,
    episodes: &[Episode],
    output_dir: &Path,
) -> Result<DownloadReport, DownloadError> {
    let mut report = DownloadReport::default();

    for episode in episodes {
        if ensure_output_dir(output_dir).await? {
            report.created_output_dir = true;
        }

        info!("Downloading file {} ...", episode.media_url());
        let file = client
            .download_to_file(episode.media_url(), output_dir)
            .await?;
        debug!(date = %episode.publication_date(), path = %file.path.display(), "episode saved");
        report.files.push(file);
    }

    Ok(report)
}
