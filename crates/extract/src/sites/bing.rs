// ABOUTME: Bing News search extractor configuration.
// ABOUTME: Selectors for news.bing.com search-result cards.

use crate::accessor::FieldAccessor;
use crate::error::ExtractError;
use crate::extractor::{Extractor, ExtractorConfig};
use crate::schema::RecordSchema;
use crate::search::SearchExtractor;

const BASE_URL: &str = "https://news.bing.com/";

/// Builds a search extractor for Bing News.
pub fn bing() -> Result<SearchExtractor, ExtractError> {
    let schema = RecordSchema::new(
        "div.news-card",
        FieldAccessor::inner_text("a.title")?,
        FieldAccessor::attribute("a.title", "href")?,
        FieldAccessor::inner_text("div.snippet")?,
    )?;

    let config = ExtractorConfig::new("Bing News", "bingnews", BASE_URL, schema);
    Ok(SearchExtractor::new(Extractor::new(config)))
}
