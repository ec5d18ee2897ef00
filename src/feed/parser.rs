//! Feed parsing into [`Episode`] records.
//!
//! The document is walked with a streaming XML reader. Every `item` element
//! below the root counts, whatever the root is called (`rss`, `rdf:RDF`, or a
//! bare container), so channel metadata is never required.

use chrono::{DateTime, NaiveDate};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::debug;

use super::error::FeedError;
use crate::episode::Episode;

const ITEM: &[u8] = b"item";
const PUB_DATE: &[u8] = b"pubDate";
const MEDIA_URL: &[u8] = b"content:encoded";

/// Parses feed XML into episodes, one per `item` that carries both a
/// `pubDate` and a `content:encoded` media URL.
///
/// Items missing either field are skipped. Output keeps document order.
/// When an item repeats a field, the first occurrence wins.
///
/// # Errors
///
/// - [`FeedError::Xml`] when the reader rejects the markup anywhere in the
///   document, including after the root element closes.
/// - [`FeedError::NotADocument`] when there is no root element, more than
///   one, stray text outside it, or the root is never closed.
/// - [`FeedError::InvalidPubDate`] when any item's `pubDate` fails to parse;
///   one bad date fails the whole call.
pub fn parse_feed(xml: &str) -> Result<Vec<Episode>, FeedError> {
    let mut reader = Reader::from_str(xml.trim_start_matches('\u{feff}'));
    let mut walker = FeedWalker::default();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| FeedError::xml(reader.error_position(), e))?;

        match event {
            Event::Start(start) => walker.open(&start)?,
            Event::Empty(start) => {
                walker.open(&start)?;
                walker.close()?;
            }
            Event::End(_) => walker.close()?,
            Event::Text(text) => {
                if walker.depth == 0 {
                    if !text.iter().all(u8::is_ascii_whitespace) {
                        return Err(FeedError::not_a_document("text outside the root element"));
                    }
                } else if walker.capturing() {
                    let unescaped = text
                        .unescape()
                        .map_err(|e| FeedError::xml(reader.buffer_position(), e))?;
                    walker.push_text(&unescaped);
                }
            }
            Event::CData(cdata) => {
                if walker.depth == 0 {
                    return Err(FeedError::not_a_document("CDATA outside the root element"));
                }
                if walker.capturing() {
                    walker.push_text(&String::from_utf8_lossy(&cdata));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype.
            _ => {}
        }
    }

    walker.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    PubDate,
    MediaUrl,
}

/// Fields gathered for the `item` currently open.
#[derive(Debug)]
struct OpenItem {
    depth: usize,
    pub_date: Option<String>,
    media_url: Option<String>,
    capture: Option<(Field, usize, String)>,
}

impl OpenItem {
    fn at(depth: usize) -> Self {
        Self {
            depth,
            pub_date: None,
            media_url: None,
            capture: None,
        }
    }
}

#[derive(Debug, Default)]
struct FeedWalker {
    depth: usize,
    seen_root: bool,
    item: Option<OpenItem>,
    items_seen: usize,
    episodes: Vec<Episode>,
}

impl FeedWalker {
    fn open(&mut self, start: &BytesStart<'_>) -> Result<(), FeedError> {
        if self.depth == 0 {
            if self.seen_root {
                return Err(FeedError::not_a_document("content after the root element"));
            }
            self.seen_root = true;
        }
        self.depth += 1;

        let name = start.name();
        let Some(item) = self.item.as_mut() else {
            if self.depth > 1 && name.as_ref() == ITEM {
                self.item = Some(OpenItem::at(self.depth));
            }
            return Ok(());
        };
        if item.capture.is_some() {
            return Ok(());
        }

        let field = match name.as_ref() {
            PUB_DATE if item.pub_date.is_none() => Some(Field::PubDate),
            MEDIA_URL if item.media_url.is_none() => Some(Field::MediaUrl),
            _ => None,
        };
        if let Some(field) = field {
            item.capture = Some((field, self.depth, String::new()));
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), FeedError> {
        let depth = self.depth;
        if let Some(item) = self.item.as_mut() {
            if item.capture.as_ref().is_some_and(|(_, at, _)| *at == depth) {
                if let Some((field, _, text)) = item.capture.take() {
                    match field {
                        Field::PubDate => item.pub_date = Some(text),
                        Field::MediaUrl => item.media_url = Some(text),
                    }
                }
            }
            if item.depth == depth {
                self.finish_item()?;
            }
        }
        self.depth = depth.saturating_sub(1);
        Ok(())
    }

    fn capturing(&self) -> bool {
        self.item.as_ref().is_some_and(|item| item.capture.is_some())
    }

    fn push_text(&mut self, text: &str) {
        if let Some((_, _, buffer)) = self.item.as_mut().and_then(|item| item.capture.as_mut()) {
            buffer.push_str(text);
        }
    }

    fn finish_item(&mut self) -> Result<(), FeedError> {
        let Some(item) = self.item.take() else {
            return Ok(());
        };
        let index = self.items_seen;
        self.items_seen += 1;

        let publication_date = non_empty(item.pub_date.as_deref())
            .map(parse_pub_date)
            .transpose()?;
        let media_url = non_empty(item.media_url.as_deref());

        match (publication_date, media_url) {
            (Some(date), Some(url)) => self.episodes.push(Episode::new(date, url)),
            (date, url) => debug!(
                index,
                has_pub_date = date.is_some(),
                has_media_url = url.is_some(),
                "skipping incomplete item"
            ),
        }
        Ok(())
    }

    fn finish(self) -> Result<Vec<Episode>, FeedError> {
        if !self.seen_root {
            return Err(FeedError::not_a_document("no root element"));
        }
        if self.depth != 0 {
            return Err(FeedError::not_a_document("document ends before the root element closes"));
        }
        Ok(self.episodes)
    }
}

/// Parses an RFC 1123 / RFC 2822 date-time and keeps the calendar date as
/// written in the feed's own offset.
///
/// # Errors
///
/// Returns [`FeedError::InvalidPubDate`] if `value` is not a valid date-time.
pub fn parse_pub_date(value: &str) -> Result<NaiveDate, FeedError> {
    DateTime::parse_from_rfc2822(value)
        .map(|dt| dt.date_naive())
        .map_err(|e| FeedError::invalid_pub_date(value, e))
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|s| !s.is_empty())
}
