// ABOUTME: The extraction driver: matches containers against a markup tree per a schema.
// ABOUTME: Yields a bounded record sequence with source injection and a link-rewrite hook.

//! The extraction driver.
//!
//! An [`Extractor`] walks container nodes matched by its schema, resolves
//! every accessor inside each container, and yields records in document
//! order until the configured result limit is reached.
//!
//! Key behaviors:
//! - Extraction is atomic: a required accessor (or an extra without a
//!   default) that matches nothing aborts the whole run with `NotFound`.
//!   Callers never see a partial sequence.
//! - `source_name` and `source_url` are injected into every record's extras
//!   before schema extras; a schema extra reusing those names overwrites the
//!   injected value (last write wins).
//! - Each call performs a fresh extraction pass; nothing is cached.

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::error::ExtractError;
use crate::record::Record;
use crate::schema::RecordSchema;
use crate::value::TagMap;

/// Default cap on the number of records one run yields.
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Rewrites an extracted link before it lands in a record.
///
/// Receives the configured base URL and the raw extracted link. Sites that
/// emit relative or encoded links (Google News prefixes article paths with
/// `./`) install one of these; the default is identity.
pub type LinkRewriter = fn(base_url: &str, link: &str) -> String;

/// Configuration for one extraction target.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Display name, e.g. "Google News". Injected as `source_name`.
    pub name: String,
    /// Machine identifier, e.g. "googlenews".
    pub kind: String,
    /// Base URL of the site. Injected as `source_url`.
    pub base_url: String,
    /// Query parameters sent with the outbound request.
    pub query_params: Vec<(String, String)>,
    /// Caps the number of records one run yields.
    pub result_limit: usize,
    /// The extraction schema.
    pub schema: RecordSchema,
}

impl ExtractorConfig {
    /// Creates a config with no query parameters and the default result limit.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        base_url: impl Into<String>,
        schema: RecordSchema,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            base_url: base_url.into(),
            query_params: Vec::new(),
            result_limit: DEFAULT_RESULT_LIMIT,
            schema,
        }
    }

    /// Sets the result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Adds a fixed query parameter.
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((name.into(), value.into()));
        self
    }
}

/// Drives container/field matching against a markup tree.
#[derive(Debug, Clone)]
pub struct Extractor {
    pub config: ExtractorConfig,
    rewrite_link: Option<LinkRewriter>,
}

impl Extractor {
    /// Creates an extractor with the identity link rewriter.
    pub fn new(config: ExtractorConfig) -> Self {
        Self {
            config,
            rewrite_link: None,
        }
    }

    /// Installs a link-rewrite hook applied to every extracted link.
    pub fn with_link_rewriter(mut self, rewriter: LinkRewriter) -> Self {
        self.rewrite_link = Some(rewriter);
        self
    }

    /// Runs a fresh extraction pass over an already-parsed markup tree.
    ///
    /// Containers are visited in document order; the run stops once
    /// `result_limit` records are collected. Any required field (or extra
    /// without a default) that matches nothing aborts the entire run.
    pub fn run(&self, doc: &Html) -> Result<Vec<Record>, ExtractError> {
        let schema = &self.config.schema;
        let mut records = Vec::new();

        for container in doc.select(schema.container()) {
            if records.len() == self.config.result_limit {
                break;
            }

            let title = schema.title.resolve(container)?;
            let link = schema.link.resolve(container)?;
            let description = schema.description.resolve(container)?;

            let mut extras = TagMap::new();
            extras.insert("source_name", self.config.name.as_str());
            extras.insert("source_url", self.config.base_url.as_str());
            for (name, accessor) in schema.extras() {
                extras.insert(name, accessor.resolve(container)?);
            }

            records.push(Record {
                title,
                link: self.process_link(&link),
                description,
                extras,
            });
        }

        debug!(
            source = %self.config.kind,
            count = records.len(),
            limit = self.config.result_limit,
            "extraction pass complete"
        );
        Ok(records)
    }

    /// Parses a markup string and runs an extraction pass over it.
    pub fn run_markup(&self, markup: &str) -> Result<Vec<Record>, ExtractError> {
        self.run(&Html::parse_document(markup))
    }

    /// Returns the query parameters for the outbound request, unmodified.
    pub fn params(&self) -> Vec<(String, String)> {
        self.config.query_params.clone()
    }

    /// Assembles the full request URL from the base URL and `params()`.
    pub fn request_url(&self) -> Result<Url, ExtractError> {
        Url::parse_with_params(&self.config.base_url, self.params()).map_err(|e| {
            ExtractError::BaseUrl {
                url: self.config.base_url.clone(),
                source: e,
            }
        })
    }

    fn process_link(&self, link: &str) -> String {
        match self.rewrite_link {
            Some(rewrite) => rewrite(&self.config.base_url, link),
            None => link.to_string(),
        }
    }
}

/// Replaces or appends a query parameter in place.
pub(crate) fn set_param(params: &mut Vec<(String, String)>, name: &str, value: String) {
    match params.iter_mut().find(|(n, _)| n == name) {
        Some(entry) => entry.1 = value,
        None => params.push((name.to_string(), value)),
    }
}
