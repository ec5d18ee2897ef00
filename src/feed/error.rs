//! Error types for feed parsing.

use thiserror::Error;

/// Errors that can occur while turning feed XML into episodes.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The XML reader rejected the document (bad syntax, mismatched tags,
    /// unknown entities).
    #[error("malformed feed XML at byte {position}: {source}")]
    Xml {
        /// Byte offset where the reader stopped.
        position: u64,
        /// The underlying reader error.
        #[source]
        source: quick_xml::Error,
    },

    /// The document is well-formed piecewise but is not a single-rooted XML
    /// document.
    #[error("malformed feed XML: {reason}")]
    NotADocument {
        /// What is wrong with the document shape.
        reason: &'static str,
    },

    /// An item carried a `pubDate` that is not an RFC 2822 date-time.
    #[error("invalid pubDate '{value}': {source}\n  Suggestion: expected a date like 'Mon, 01 Jan 2024 06:00:00 +0100'")]
    InvalidPubDate {
        /// The raw `pubDate` text.
        value: String,
        /// The underlying date parse error.
        #[source]
        source: chrono::ParseError,
    },
}

impl FeedError {
    /// Creates an `Xml` error.
    #[must_use]
    pub fn xml(position: u64, source: impl Into<quick_xml::Error>) -> Self {
        Self::Xml {
            position,
            source: source.into(),
        }
    }

    /// Creates a `NotADocument` error.
    #[must_use]
    pub fn not_a_document(reason: &'static str) -> Self {
        Self::NotADocument { reason }
    }

    /// Creates an `InvalidPubDate` error.
    #[must_use]
    pub fn invalid_pub_date(value: &str, source: chrono::ParseError) -> Self {
        Self::InvalidPubDate {
            value: value.to_string(),
            source,
        }
    }

    /// Returns true when the document itself could not be read as XML.
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Xml { .. } | Self::NotADocument { .. })
    }
}
