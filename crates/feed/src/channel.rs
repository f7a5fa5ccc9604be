// ABOUTME: Feed-level channel metadata wrapping a sequence of records.
// ABOUTME: Title, link, description, plus ordered extra top-level tags.

use serde::Serialize;

use presswire_extract::{TagMap, TagValue};

/// Feed-level metadata: title, link, description, and any extra top-level
/// tags to emit alongside them.
///
/// Extra tags go through [`Channel::add_top_tag`], which writes the same
/// field both writers read, so a tag added here always appears in the
/// rendered document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    extra_tags: TagMap,
}

impl Channel {
    /// Creates a channel with no extra top-level tags.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            description: description.into(),
            extra_tags: TagMap::new(),
        }
    }

    /// Sets an extra top-level tag. Re-setting a name overwrites its value
    /// while keeping its original position.
    pub fn add_top_tag(&mut self, name: impl Into<String>, value: impl Into<TagValue>) {
        self.extra_tags.insert(name, value);
    }

    /// The extra top-level tags in insertion order.
    pub fn extra_tags(&self) -> &TagMap {
        &self.extra_tags
    }
}
