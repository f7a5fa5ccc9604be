// ABOUTME: Record schema bundling a container selector with field accessors.
// ABOUTME: Describes one extraction target: title, link, description, plus named extras.

//! Record schemas.
//!
//! A schema is a pure data holder describing one extraction target: the
//! container selector that delimits candidate records, the three required
//! accessors (title, link, description), and any number of named extra
//! accessors in insertion order.

use scraper::Selector;

use crate::accessor::{compile, FieldAccessor};
use crate::error::ExtractError;

/// A named bundle of accessors describing one extraction target.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    container: Selector,
    container_css: String,
    pub title: FieldAccessor,
    pub link: FieldAccessor,
    pub description: FieldAccessor,
    extras: Vec<(String, FieldAccessor)>,
}

impl RecordSchema {
    /// Builds a schema from a container selector and the three required accessors.
    ///
    /// The container selector compiles eagerly; a malformed selector fails
    /// here rather than at extraction time.
    pub fn new(
        container_css: impl Into<String>,
        title: FieldAccessor,
        link: FieldAccessor,
        description: FieldAccessor,
    ) -> Result<Self, ExtractError> {
        let container_css = container_css.into();
        let container = compile(&container_css)?;
        Ok(Self {
            container,
            container_css,
            title,
            link,
            description,
            extras: Vec::new(),
        })
    }

    /// Inserts or overwrites a named extra accessor.
    ///
    /// Names not previously present keep first-insertion order; re-adding a
    /// name replaces the accessor in place.
    pub fn add_extra(&mut self, name: impl Into<String>, accessor: FieldAccessor) {
        let name = name.into();
        match self.extras.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = accessor,
            None => self.extras.push((name, accessor)),
        }
    }

    /// The compiled container selector.
    pub fn container(&self) -> &Selector {
        &self.container
    }

    /// The original container selector string.
    pub fn container_css(&self) -> &str {
        &self.container_css
    }

    /// Iterates extra accessors in insertion order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &FieldAccessor)> {
        self.extras.iter().map(|(n, a)| (n.as_str(), a))
    }
}
