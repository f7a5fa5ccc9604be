// ABOUTME: Search-capable extractor that assembles a query string into request parameters.
// ABOUTME: Supports a search term plus an optional site-restriction clause.

//! Search extraction.
//!
//! A [`SearchExtractor`] wraps a plain [`Extractor`] and adds query-string
//! assembly: the search term lands in a configurable parameter (`q` by
//! default), optionally extended with a `site:` restriction clause built
//! from the domains added via [`SearchExtractor::add_site`].
//!
//! The assembled query is derived fresh on every call and never written
//! back into the stored search text, so parameter assembly is idempotent.

use scraper::Html;
use url::Url;

use crate::error::ExtractError;
use crate::extractor::{set_param, Extractor};
use crate::record::Record;

/// Default name of the query parameter carrying the search term.
pub const DEFAULT_SEARCH_PARAM: &str = "q";

/// An extractor specialization that carries a search term and optional
/// site restrictions.
#[derive(Debug, Clone)]
pub struct SearchExtractor {
    extractor: Extractor,
    search_text: String,
    search_param: String,
    restricted_sites: Vec<String>,
}

impl SearchExtractor {
    /// Wraps an extractor, using the default `q` search parameter.
    pub fn new(extractor: Extractor) -> Self {
        Self {
            extractor,
            search_text: String::new(),
            search_param: DEFAULT_SEARCH_PARAM.to_string(),
            restricted_sites: Vec::new(),
        }
    }

    /// Overrides the name of the query parameter carrying the search term.
    pub fn with_search_param(mut self, name: impl Into<String>) -> Self {
        self.search_param = name.into();
        self
    }

    /// Sets the text to search for.
    pub fn search_term(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Appends a domain to the site-restriction list.
    ///
    /// No deduplication: adding the same domain twice produces a redundant
    /// but valid clause.
    pub fn add_site(&mut self, domain: impl Into<String>) {
        self.restricted_sites.push(domain.into());
    }

    /// Derives the final query text: the search term plus, when any sites
    /// are restricted, ` site:D1 OR site:D2 ...` in insertion order.
    pub fn assembled_query(&self) -> String {
        if self.restricted_sites.is_empty() {
            return self.search_text.clone();
        }
        format!(
            "{} site:{}",
            self.search_text,
            self.restricted_sites.join(" OR site:")
        )
    }

    /// Returns the request parameters with the search term set.
    ///
    /// The assembled query overwrites any existing entry of the same name;
    /// all other configured parameters pass through unmodified.
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = self.extractor.params();
        set_param(&mut params, &self.search_param, self.assembled_query());
        params
    }

    /// Assembles the full request URL from the base URL and `params()`.
    pub fn request_url(&self) -> Result<Url, ExtractError> {
        let base = &self.extractor.config.base_url;
        Url::parse_with_params(base, self.params()).map_err(|e| ExtractError::BaseUrl {
            url: base.clone(),
            source: e,
        })
    }

    /// Runs a fresh extraction pass over an already-parsed markup tree.
    pub fn run(&self, doc: &Html) -> Result<Vec<Record>, ExtractError> {
        self.extractor.run(doc)
    }

    /// Parses a markup string and runs an extraction pass over it.
    pub fn run_markup(&self, markup: &str) -> Result<Vec<Record>, ExtractError> {
        self.extractor.run_markup(markup)
    }

    /// The wrapped extractor.
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::accessor::FieldAccessor;
    use crate::extractor::ExtractorConfig;
    use crate::schema::RecordSchema;

    fn search_extractor() -> SearchExtractor {
        let schema = RecordSchema::new(
            "div.card",
            FieldAccessor::inner_text("h3").unwrap(),
            FieldAccessor::attribute("a", "href").unwrap(),
            FieldAccessor::inner_text("span").unwrap(),
        )
        .unwrap();
        SearchExtractor::new(Extractor::new(ExtractorConfig::new(
            "Example News",
            "example",
            "https://example.com/",
            schema,
        )))
    }

    #[test]
    fn test_search_term_lands_in_default_param() {
        let mut search = search_extractor();
        search.search_term("cats");
        assert_eq!(
            search.params(),
            vec![("q".to_string(), "cats".to_string())]
        );
    }

    #[test]
    fn test_site_restriction_clause() {
        let mut search = search_extractor();
        search.search_term("cats");
        search.add_site("wsj.com");
        search.add_site("npr.org");
        assert_eq!(search.assembled_query(), "cats site:wsj.com OR site:npr.org");
    }

    #[test]
    fn test_params_assembly_is_idempotent() {
        let mut search = search_extractor();
        search.search_term("cats");
        search.add_site("wsj.com");

        let first = search.params();
        let second = search.params();
        assert_eq!(first, second);
        assert_eq!(first[0].1, "cats site:wsj.com");
    }

    #[test]
    fn test_duplicate_sites_allowed() {
        let mut search = search_extractor();
        search.search_term("cats");
        search.add_site("npr.org");
        search.add_site("npr.org");
        assert_eq!(
            search.assembled_query(),
            "cats site:npr.org OR site:npr.org"
        );
    }

    #[test]
    fn test_custom_search_param_overwrites_configured_entry() {
        let schema = RecordSchema::new(
            "div.card",
            FieldAccessor::inner_text("h3").unwrap(),
            FieldAccessor::attribute("a", "href").unwrap(),
            FieldAccessor::inner_text("span").unwrap(),
        )
        .unwrap();
        let config = ExtractorConfig::new("Example News", "example", "https://example.com/", schema)
            .with_param("p", "stale")
            .with_param("hl", "en");
        let mut search = SearchExtractor::new(Extractor::new(config)).with_search_param("p");
        search.search_term("dogs");

        assert_eq!(
            search.params(),
            vec![
                ("p".to_string(), "dogs".to_string()),
                ("hl".to_string(), "en".to_string())
            ]
        );
    }

    #[test]
    fn test_request_url_encodes_query() {
        let mut search = search_extractor();
        search.search_term("cats");
        search.add_site("wsj.com");

        let url = search.request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.com/?q=cats+site%3Awsj.com"
        );
    }
}
