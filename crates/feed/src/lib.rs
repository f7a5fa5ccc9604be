// ABOUTME: Feed serialization for extracted article records.
// ABOUTME: Re-exports the public API: Channel, FeedWriter, RssWriter, JsonFeedWriter, FeedError.

//! presswire-feed - serializes extracted records into syndication formats.
//!
//! A [`Channel`] carries feed-level metadata; the [`FeedWriter`] contract
//! turns a channel plus a record sequence into a document. Two writers
//! implement it: [`RssWriter`] (RSS 2.0 XML) and [`JsonFeedWriter`]
//! (JSON Feed 1.1).
//!
//! # Example
//!
//! ```
//! use presswire_feed::{Channel, FeedWriter, RssWriter};
//!
//! # fn main() -> Result<(), presswire_feed::FeedError> {
//! let mut channel = Channel::new("test", "https://www.github.com", "This is only a test");
//! channel.add_top_tag("language", "en-us");
//!
//! let xml = RssWriter::new().render(&channel, &[])?;
//! assert!(xml.contains("<rss version=\"2.0\">"));
//! # Ok(())
//! # }
//! ```

pub mod channel;
pub mod error;
pub mod jsonfeed;
pub mod rss;
pub mod writer;

pub use crate::channel::Channel;
pub use crate::error::FeedError;
pub use crate::jsonfeed::{JsonFeedWriter, JSON_FEED_VERSION};
pub use crate::rss::RssWriter;
pub use crate::writer::FeedWriter;
