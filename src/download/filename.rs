//! Filename derivation for downloaded episodes.

use super::error::DownloadError;

/// Returns the final `/`-separated segment of a media URL.
///
/// The raw URL text is split as-is, so a query string stays part of the
/// name (`https://host/p/ep123.mp3?x=1` gives `ep123.mp3?x=1`). Trailing
/// slashes are skipped, so `https://host/show/` names the file `show`.
///
/// # Errors
///
/// Returns [`DownloadError::InvalidUrl`] when no non-empty segment is left.
pub fn filename_from_url(url: &str) -> Result<String, DownloadError> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| DownloadError::invalid_url(url))
}
