// ABOUTME: Scalar tag values and the insertion-ordered TagMap container.
// ABOUTME: Backs record extras and channel-level extra tags with stable ordering.

//! Scalar values and ordered maps for extra tags.
//!
//! Extracted fields are plain text, but feed-level extra tags may carry
//! numbers, booleans, or timestamps. `TagValue` covers those scalars and
//! `TagMap` keeps them in first-insertion order with unique keys, which is
//! what makes feed output reproducible across identical inputs.

use chrono::{DateTime, FixedOffset, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A scalar value carried by an extra tag.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(DateTime<FixedOffset>),
}

impl TagValue {
    /// Renders the canonical string form of this value.
    ///
    /// Timestamps render as RFC 3339 (ISO-8601) text; everything else uses
    /// its natural display form.
    pub fn canonical_text(&self) -> String {
        match self {
            TagValue::Text(s) => s.clone(),
            TagValue::Integer(n) => n.to_string(),
            TagValue::Float(f) => f.to_string(),
            TagValue::Boolean(b) => b.to_string(),
            TagValue::Timestamp(ts) => ts.to_rfc3339(),
        }
    }

    /// Returns the text content if this is a Text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Text(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Text(s)
    }
}

impl From<i64> for TagValue {
    fn from(n: i64) -> Self {
        TagValue::Integer(n)
    }
}

impl From<f64> for TagValue {
    fn from(f: f64) -> Self {
        TagValue::Float(f)
    }
}

impl From<bool> for TagValue {
    fn from(b: bool) -> Self {
        TagValue::Boolean(b)
    }
}

impl From<DateTime<FixedOffset>> for TagValue {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        TagValue::Timestamp(ts)
    }
}

impl From<DateTime<Utc>> for TagValue {
    fn from(ts: DateTime<Utc>) -> Self {
        TagValue::Timestamp(ts.fixed_offset())
    }
}

impl Serialize for TagValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TagValue::Text(s) => serializer.serialize_str(s),
            TagValue::Integer(n) => serializer.serialize_i64(*n),
            TagValue::Float(f) => serializer.serialize_f64(*f),
            TagValue::Boolean(b) => serializer.serialize_bool(*b),
            TagValue::Timestamp(ts) => serializer.serialize_str(&ts.to_rfc3339()),
        }
    }
}

/// An insertion-ordered map of tag names to values.
///
/// Keys are unique. Inserting an existing key replaces the value in place,
/// keeping the key's original position, so iteration order is stable across
/// overwrites.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagMap {
    entries: Vec<(String, TagValue)>,
}

impl TagMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites an entry.
    ///
    /// New keys append; existing keys keep their first-insertion position
    /// and take the new value (last write wins).
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<TagValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks up a value by key.
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// Returns true if the key is present.
    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TagMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut map = TagMap::new();
        map.insert("c", "3");
        map.insert("a", "1");
        map.insert("b", "2");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut map = TagMap::new();
        map.insert("first", "old");
        map.insert("second", "x");
        map.insert("first", "new");

        assert_eq!(map.len(), 2);
        let entries: Vec<(&str, String)> = map
            .iter()
            .map(|(k, v)| (k, v.canonical_text()))
            .collect();
        assert_eq!(
            entries,
            vec![("first", "new".to_string()), ("second", "x".to_string())]
        );
    }

    #[test]
    fn test_get_and_contains() {
        let mut map = TagMap::new();
        map.insert("lang", "en-us");

        assert!(map.contains_key("lang"));
        assert_eq!(map.get("lang").and_then(|v| v.as_text()), Some("en-us"));
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn test_canonical_text_scalars() {
        assert_eq!(TagValue::from("hi").canonical_text(), "hi");
        assert_eq!(TagValue::from(42i64).canonical_text(), "42");
        assert_eq!(TagValue::from(true).canonical_text(), "true");
        assert_eq!(TagValue::from(1.5f64).canonical_text(), "1.5");
    }

    #[test]
    fn test_canonical_text_timestamp() {
        let ts = Utc.with_ymd_and_hms(2022, 3, 14, 9, 26, 53).unwrap();
        let value = TagValue::from(ts);
        assert_eq!(value.canonical_text(), "2022-03-14T09:26:53+00:00");
    }

    #[test]
    fn test_serialize_as_json_map() {
        let mut map = TagMap::new();
        map.insert("copyright", "2022");
        map.insert("ttl", 60i64);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"copyright":"2022","ttl":60}"#);
    }
}
