//! Podfetch Core Library
//!
//! This library provides the core functionality for the podfetch tool,
//! which downloads the episodes of a podcast RSS feed published after a
//! given date.
//!
//! # Architecture
//!
//! One run is a strictly sequential pipeline ([`pipeline::run`]):
//! - [`feed`] - Fetch the RSS document and parse it into [`Episode`]s
//! - [`selector`] - Sort, date-filter and cap the episode list
//! - [`download`] - Stream each selected episode to the output folder
//!
//! [`RunConfig`] carries the immutable settings for a run.

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod download;
pub mod episode;
pub mod feed;
pub mod pipeline;
pub mod selector;
mod user_agent;

// Re-export commonly used types
pub use config::RunConfig;
pub use download::{DownloadError, DownloadReport, DownloadedFile, HttpClient};
pub use episode::Episode;
pub use feed::{DEFAULT_FEED_URL, FeedError, fetch_feed, parse_feed};
pub use pipeline::{PipelineError, RunSummary, run};
pub use selector::{SelectionOrder, select_episodes};
