//! User-Agent string sent with every request.

/// Default User-Agent for feed and episode requests (identifies the tool).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    let version = env!("CARGO_PKG_VERSION");
    format!("podfetch/{version} (podcast-downloader)")
}
