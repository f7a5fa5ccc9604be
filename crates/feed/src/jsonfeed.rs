// ABOUTME: JSON Feed 1.1 writer producing the format's flat object shape.
// ABOUTME: Channel extras merge as sibling keys; items carry id/title/url/content_text.

//! JSON Feed 1.1 rendering.
//!
//! Top-level keys in order: `version`, `title`, `home_page_url`,
//! `description`, any extra top-level tags, then `items`. Each item carries
//! `id` (= link), `title`, `url` (= link), `content_text` (= description),
//! with the record's extras merged as sibling keys. Timestamp values render
//! as ISO-8601 strings; a non-finite float cannot become a JSON number and
//! fails the render.

use serde_json::{Map, Number, Value};
use tracing::debug;

use presswire_extract::{Record, TagValue};

use crate::channel::Channel;
use crate::error::FeedError;
use crate::writer::FeedWriter;

/// Version URL identifying the JSON Feed 1.1 spec.
pub const JSON_FEED_VERSION: &str = "https://jsonfeed.org/version/1.1";

/// Renders records as a JSON Feed 1.1 document.
#[derive(Debug, Clone)]
pub struct JsonFeedWriter {
    pretty: bool,
}

impl JsonFeedWriter {
    /// Creates a pretty-printing writer (two-space indentation).
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Creates a writer that emits the document compactly.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    /// Builds the feed as a JSON value without serializing it.
    pub fn feed_value(&self, channel: &Channel, records: &[Record]) -> Result<Value, FeedError> {
        let mut feed = Map::new();
        feed.insert("version".to_string(), Value::String(JSON_FEED_VERSION.to_string()));
        feed.insert("title".to_string(), Value::String(channel.title.clone()));
        feed.insert(
            "home_page_url".to_string(),
            Value::String(channel.link.clone()),
        );
        feed.insert(
            "description".to_string(),
            Value::String(channel.description.clone()),
        );
        for (name, value) in channel.extra_tags().iter() {
            feed.insert(name.to_string(), to_json(name, value)?);
        }

        let items = records
            .iter()
            .map(|record| item_value(record))
            .collect::<Result<Vec<Value>, FeedError>>()?;
        feed.insert("items".to_string(), Value::Array(items));

        Ok(Value::Object(feed))
    }
}

impl Default for JsonFeedWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedWriter for JsonFeedWriter {
    fn render(&self, channel: &Channel, records: &[Record]) -> Result<String, FeedError> {
        let feed = self.feed_value(channel, records)?;
        let document = if self.pretty {
            serde_json::to_string_pretty(&feed)?
        } else {
            serde_json::to_string(&feed)?
        };

        debug!(items = records.len(), bytes = document.len(), "rendered JSON feed");
        Ok(document)
    }
}

fn item_value(record: &Record) -> Result<Value, FeedError> {
    let mut item = Map::new();
    item.insert("id".to_string(), Value::String(record.link.clone()));
    item.insert("title".to_string(), Value::String(record.title.clone()));
    item.insert("url".to_string(), Value::String(record.link.clone()));
    item.insert(
        "content_text".to_string(),
        Value::String(record.description.clone()),
    );
    for (name, value) in record.extras.iter() {
        item.insert(name.to_string(), to_json(name, value)?);
    }
    Ok(Value::Object(item))
}

fn to_json(key: &str, value: &TagValue) -> Result<Value, FeedError> {
    match value {
        TagValue::Text(s) => Ok(Value::String(s.clone())),
        TagValue::Integer(n) => Ok(Value::Number((*n).into())),
        TagValue::Float(f) => Number::from_f64(*f)
            .map(Value::Number)
            .ok_or_else(|| FeedError::serialize(key, "non-finite float")),
        TagValue::Boolean(b) => Ok(Value::Bool(*b)),
        TagValue::Timestamp(ts) => Ok(Value::String(ts.to_rfc3339())),
    }
}
