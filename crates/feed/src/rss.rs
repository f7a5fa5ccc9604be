// ABOUTME: RSS 2.0 writer built on the quick-xml event writer.
// ABOUTME: Emits rss/channel/item trees with extras flattened as elements.

//! RSS 2.0 rendering.
//!
//! The document is a single `<rss version="2.0">` root holding one
//! `<channel>`. Channel children, in order: title, link, description, one
//! element per extra top-level tag, then one `<item>` per record. Item
//! children, in order: title, link, description, guid (= link), then one
//! element per record extra. Extras keys become element names, so a key
//! that is not a valid XML name fails the render.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use presswire_extract::Record;

use crate::channel::Channel;
use crate::error::FeedError;
use crate::writer::FeedWriter;

/// Renders records as an RSS 2.0 document.
#[derive(Debug, Clone)]
pub struct RssWriter {
    pretty: bool,
}

impl RssWriter {
    /// Creates a pretty-printing writer (two-space indentation).
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Creates a writer that emits the document on a single line.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn render_into(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        channel: &Channel,
        records: &[Record],
    ) -> Result<(), FeedError> {
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        write_text_element(writer, "title", &channel.title)?;
        write_text_element(writer, "link", &channel.link)?;
        write_text_element(writer, "description", &channel.description)?;
        for (name, value) in channel.extra_tags().iter() {
            check_element_name(name)?;
            write_text_element(writer, name, &value.canonical_text())?;
        }

        for record in records {
            writer.write_event(Event::Start(BytesStart::new("item")))?;
            write_text_element(writer, "title", &record.title)?;
            write_text_element(writer, "link", &record.link)?;
            write_text_element(writer, "description", &record.description)?;
            write_text_element(writer, "guid", &record.link)?;
            for (name, value) in record.extras.iter() {
                check_element_name(name)?;
                write_text_element(writer, name, &value.canonical_text())?;
            }
            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;
        Ok(())
    }
}

impl Default for RssWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedWriter for RssWriter {
    fn render(&self, channel: &Channel, records: &[Record]) -> Result<String, FeedError> {
        let mut writer = if self.pretty {
            Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2)
        } else {
            Writer::new(Cursor::new(Vec::new()))
        };

        self.render_into(&mut writer, channel, records)?;

        let document = String::from_utf8(writer.into_inner().into_inner())?;
        debug!(items = records.len(), bytes = document.len(), "rendered RSS feed");
        Ok(document)
    }
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> Result<(), FeedError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Rejects extras keys that cannot serve as XML element names.
fn check_element_name(name: &str) -> Result<(), FeedError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(FeedError::serialize(name, "not a valid XML element name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use presswire_extract::TagMap;

    fn record(n: u32) -> Record {
        let mut extras = TagMap::new();
        extras.insert("source_name", "Example News");
        extras.insert("source_url", "https://example.com/");
        Record {
            title: format!("Title {}", n),
            link: format!("https://example.com/{}", n),
            description: format!("Description {}", n),
            extras,
        }
    }

    fn channel() -> Channel {
        Channel::new("test", "https://www.github.com", "This is only a test")
    }

    #[test]
    fn test_renders_declaration_and_root() {
        let xml = RssWriter::compact().render(&channel(), &[record(1)]).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"<rss version="2.0"><channel>"#));
        assert!(xml.ends_with("</channel></rss>"));
    }

    #[test]
    fn test_item_children_in_order() {
        let xml = RssWriter::compact().render(&channel(), &[record(7)]).unwrap();
        assert!(xml.contains(
            "<item>\
             <title>Title 7</title>\
             <link>https://example.com/7</link>\
             <description>Description 7</description>\
             <guid>https://example.com/7</guid>\
             <source_name>Example News</source_name>\
             <source_url>https://example.com/</source_url>\
             </item>"
        ));
    }

    #[test]
    fn test_channel_extra_tags_before_items() {
        let mut channel = channel();
        channel.add_top_tag("language", "en-us");
        let xml = RssWriter::compact().render(&channel, &[record(1)]).unwrap();

        let language = xml.find("<language>en-us</language>").unwrap();
        let item = xml.find("<item>").unwrap();
        assert!(language < item);
    }

    #[test]
    fn test_text_is_escaped() {
        let mut rec = record(1);
        rec.title = "Cats & Dogs <live>".to_string();
        let xml = RssWriter::compact().render(&channel(), &[rec]).unwrap();
        assert!(xml.contains("<title>Cats &amp; Dogs &lt;live&gt;</title>"));
    }

    #[test]
    fn test_invalid_extras_key_fails() {
        let mut rec = record(1);
        rec.extras.insert("bad key", "value");
        let err = RssWriter::compact().render(&channel(), &[rec]).unwrap_err();
        assert!(err.is_serialize());
    }

    #[test]
    fn test_pretty_output_preserves_content_and_order() {
        let records = vec![record(1), record(2)];
        let pretty = RssWriter::new().render(&channel(), &records).unwrap();
        let compact = RssWriter::compact().render(&channel(), &records).unwrap();

        // Indentation only: stripping inter-element whitespace recovers the
        // compact document.
        let stripped: String = pretty
            .lines()
            .map(|line| line.trim_start())
            .collect::<Vec<_>>()
            .join("");
        assert_eq!(stripped, compact);
    }

    #[test]
    fn test_element_name_validation() {
        assert!(check_element_name("pubDate").is_ok());
        assert!(check_element_name("dc:creator").is_ok());
        assert!(check_element_name("_private").is_ok());
        assert!(check_element_name("").is_err());
        assert!(check_element_name("1st").is_err());
        assert!(check_element_name("has space").is_err());
    }
}
