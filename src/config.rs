//! Immutable run configuration.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::feed::DEFAULT_FEED_URL;
use crate::selector::SelectionOrder;

/// Everything one run needs, fixed before the pipeline starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    feed_url: String,
    since: NaiveDate,
    max_files: usize,
    output_dir: PathBuf,
    order: SelectionOrder,
    dry_run: bool,
}

impl RunConfig {
    /// Creates a configuration for the default feed, keeping the oldest
    /// qualifying episodes and actually downloading them.
    #[must_use]
    pub fn new(since: NaiveDate, max_files: usize, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            since,
            max_files,
            output_dir: output_dir.into(),
            order: SelectionOrder::default(),
            dry_run: false,
        }
    }

    /// Reads from `feed_url` instead of the default feed.
    #[must_use]
    pub fn with_feed_url(mut self, feed_url: impl Into<String>) -> Self {
        self.feed_url = feed_url.into();
        self
    }

    /// Sets which end of the qualifying episodes to keep.
    #[must_use]
    pub fn with_order(mut self, order: SelectionOrder) -> Self {
        self.order = order;
        self
    }

    /// When `true`, the run stops after selection and writes nothing.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    #[must_use]
    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }

    /// Exclusive cutoff: only episodes published after this date qualify.
    #[must_use]
    pub fn since(&self) -> NaiveDate {
        self.since
    }

    #[must_use]
    pub fn max_files(&self) -> usize {
        self.max_files
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub fn order(&self) -> SelectionOrder {
        self.order
    }

    #[must_use]
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
