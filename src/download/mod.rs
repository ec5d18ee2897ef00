//! HTTP fetching and streaming episode downloads.
//!
//! # Features
//!
//! - Streaming downloads (memory-efficient for long episodes)
//! - Filenames taken verbatim from the last URL path segment
//! - Configurable timeouts (30s connect, 5min read by default)
//! - Structured error types with full context
//! - Output folder created on demand, one level deep
//!
//! # Example
//!
//! ```no_run
//! use podfetch_core::download::HttpClient;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = HttpClient::new();
//! let file = client
//!     .download_to_file("https://example.com/shows/ep1.mp3", Path::new("./episodes"))
//!     .await?;
//! println!("Downloaded: {}", file.path.display());
//! # Ok(())
//! # }
//! ```

mod client;
mod constants;
mod engine;
mod error;
mod filename;

pub use client::{DownloadedFile, HttpClient};
pub use constants::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS};
pub use engine::{DownloadReport, download_episodes, ensure_output_dir};
pub use error::DownloadError;
pub use filename::filename_from_url;
