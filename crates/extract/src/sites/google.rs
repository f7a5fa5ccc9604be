// ABOUTME: Google News search extractor configuration.
// ABOUTME: Selectors for news.google.com search results plus its link rewriter.

use crate::accessor::FieldAccessor;
use crate::error::ExtractError;
use crate::extractor::{Extractor, ExtractorConfig};
use crate::schema::RecordSchema;
use crate::search::SearchExtractor;

const BASE_URL: &str = "https://news.google.com/";

/// Builds a search extractor for Google News.
pub fn google() -> Result<SearchExtractor, ExtractError> {
    let schema = RecordSchema::new(
        "div.NiLAwe",
        FieldAccessor::inner_text("h3.ipQwMb")?,
        FieldAccessor::attribute("a.VDXfz", "href")?,
        FieldAccessor::inner_text("span.xBbh9")?,
    )?;

    let config = ExtractorConfig::new("Google News", "googlenews", BASE_URL, schema);
    let extractor = Extractor::new(config).with_link_rewriter(rewrite_link);
    Ok(SearchExtractor::new(extractor))
}

/// Google article links arrive as `./articles/...`; strip the leading `./`
/// and resolve against the base URL.
fn rewrite_link(base_url: &str, link: &str) -> String {
    match link.strip_prefix("./") {
        Some(rest) => format!("{}{}", base_url, rest),
        None => link.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrites_relative_article_link() {
        assert_eq!(
            rewrite_link(BASE_URL, "./articles/CAIiEIl0"),
            "https://news.google.com/articles/CAIiEIl0"
        );
    }

    #[test]
    fn test_leaves_absolute_link_alone() {
        assert_eq!(
            rewrite_link(BASE_URL, "https://example.com/story"),
            "https://example.com/story"
        );
    }

    #[test]
    fn test_config_identity() {
        let search = google().unwrap();
        let config = &search.extractor().config;
        assert_eq!(config.name, "Google News");
        assert_eq!(config.kind, "googlenews");
        assert_eq!(config.base_url, BASE_URL);
    }

    #[test]
    fn test_extracts_and_rewrites_from_sample_markup() {
        let markup = r#"
            <div class="NiLAwe">
                <h3 class="ipQwMb">Cats elected</h3>
                <a class="VDXfz" href="./articles/abc123">story</a>
                <span class="xBbh9">Cats win the local election.</span>
            </div>
        "#;

        let records = google().unwrap().run_markup(markup).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Cats elected");
        assert_eq!(records[0].link, "https://news.google.com/articles/abc123");
        assert_eq!(
            records[0].extras.get("source_name").and_then(|v| v.as_text()),
            Some("Google News")
        );
    }
}
