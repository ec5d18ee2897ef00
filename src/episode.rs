//! The episode record produced by the feed parser.

use chrono::NaiveDate;

/// One downloadable podcast episode.
///
/// Both fields are always present: feed items lacking either one never
/// become an `Episode`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Episode {
    publication_date: NaiveDate,
    media_url: String,
}

impl Episode {
    /// Creates an episode from its publication date and media URL.
    #[must_use]
    pub fn new(publication_date: NaiveDate, media_url: impl Into<String>) -> Self {
        Self {
            publication_date,
            media_url: media_url.into(),
        }
    }

    /// Calendar date the episode was published, time of day dropped.
    #[must_use]
    pub fn publication_date(&self) -> NaiveDate {
        self.publication_date
    }

    /// URL of the audio file.
    #[must_use]
    pub fn media_url(&self) -> &str {
        &self.media_url
    }
}
