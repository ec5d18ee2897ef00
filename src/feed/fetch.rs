//! Feed retrieval.

use tracing::info;

use crate::download::{DownloadError, HttpClient};

/// Default feed the tool downloads from.
pub const DEFAULT_FEED_URL: &str =
    "https://deejayreloadedpodcast.maxxer.it/v2019/rss/deejay-chiama-italia.xml";

/// Issues one GET for `url` and returns the raw feed XML.
///
/// # Errors
///
/// Returns [`DownloadError`] on malformed URLs, network failures and
/// non-success HTTP status codes. There is no retry.
pub async fn fetch_feed(client: &HttpClient, url: &str) -> Result<String, DownloadError> {
    info!("Getting the XML from {url}");
    client.get_text(url).await
}
