// ABOUTME: The plain extracted record model produced by an extraction run.
// ABOUTME: Holds title, link, description, and ordered extra fields.

use std::fmt;

use serde::Serialize;

use crate::value::TagMap;

/// One extracted article.
///
/// Records are created fresh on each extraction run and never mutated
/// afterwards. The `extras` map always contains at least `source_name` and
/// `source_url`, injected by the extractor, identifying which site produced
/// the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub title: String,
    pub link: String,
    pub description: String,
    pub extras: TagMap,
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "title: {}", self.title)?;
        writeln!(f, "link: {}", self.link)?;
        write!(f, "description: {}", self.description)?;
        for (name, value) in self.extras.iter() {
            write!(f, "\n{}: {}", name, value.canonical_text())?;
        }
        Ok(())
    }
}
