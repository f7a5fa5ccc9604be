// ABOUTME: Yahoo News search extractor configuration.
// ABOUTME: Selectors for news.search.yahoo.com result articles; search param is `p`.

use crate::accessor::FieldAccessor;
use crate::error::ExtractError;
use crate::extractor::{Extractor, ExtractorConfig};
use crate::schema::RecordSchema;
use crate::search::SearchExtractor;

const BASE_URL: &str = "https://news.search.yahoo.com/search";

/// Builds a search extractor for Yahoo News.
pub fn yahoo() -> Result<SearchExtractor, ExtractError> {
    let schema = RecordSchema::new(
        "div.NewsArticle",
        FieldAccessor::inner_text("h4.s-title")?,
        FieldAccessor::attribute("h4.s-title a", "href")?,
        FieldAccessor::inner_text("p.s-desc")?,
    )?;

    let config = ExtractorConfig::new("Yahoo News", "yahoonews", BASE_URL, schema);
    Ok(SearchExtractor::new(Extractor::new(config)).with_search_param("p"))
}
