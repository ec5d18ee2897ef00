//! Feed retrieval and parsing.
//!
//! [`fetch_feed`] pulls the RSS document over HTTP; [`parse_feed`] turns it
//! into [`Episode`](crate::Episode) records, reading only each item's
//! `pubDate` and `content:encoded`.

mod error;
mod fetch;
mod parser;

pub use error::FeedError;
pub use fetch::{DEFAULT_FEED_URL, fetch_feed};
pub use parser::{parse_feed, parse_pub_date};
