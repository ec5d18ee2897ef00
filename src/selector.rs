//! Choosing which parsed episodes to download.
//!
//! Selection runs three steps in order: sort newest-first, drop everything
//! published on or before the cutoff, then keep at most `max_files` records.
//! By default the records kept are the *oldest* qualifying ones (the tail of
//! the newest-first list); [`SelectionOrder::Newest`] keeps the head instead.

use std::fmt;

use chrono::NaiveDate;
use tracing::debug;

use crate::episode::Episode;

/// Which end of the filtered, newest-first list to keep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionOrder {
    /// Keep the oldest episodes after the cutoff.
    #[default]
    Oldest,
    /// Keep the most recent episodes.
    Newest,
}

impl fmt::Display for SelectionOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oldest => f.write_str("oldest"),
            Self::Newest => f.write_str("newest"),
        }
    }
}

/// Picks the episodes to download.
///
/// The result is sorted newest-first, every record is dated strictly after
/// `since`, and its length is `min(max_files, qualifying)`. Asking for more
/// files than qualify returns all of them. Episodes sharing a date keep their
/// feed order.
#[must_use]
pub fn select_episodes(
    mut episodes: Vec<Episode>,
    since: NaiveDate,
    max_files: usize,
    order: SelectionOrder,
) -> Vec<Episode> {
    // Stable sort: equal dates stay in document order.
    episodes.sort_by(|a, b| b.publication_date().cmp(&a.publication_date()));
    episodes.retain(|e| e.publication_date() > since);

    let qualifying = episodes.len();
    let take = max_files.min(qualifying);
    match order {
        SelectionOrder::Oldest => {
            episodes.drain(..qualifying - take);
        }
        SelectionOrder::Newest => episodes.truncate(take),
    }

    debug!(%since, max_files, %order, qualifying, selected = episodes.len(), "episodes selected");
    episodes
}
