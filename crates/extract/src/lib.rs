// ABOUTME: Declarative article extraction from news-aggregator search-result markup.
// ABOUTME: Re-exports the public API: accessors, schemas, records, extractors, site configs.

//! presswire-extract - declarative article extraction from search-result markup.
//!
//! The extraction model is a small stack of value types: a [`FieldAccessor`]
//! resolves one scalar from a node, a [`RecordSchema`] bundles a container
//! selector with accessors, and an [`Extractor`] drives the schema over a
//! parsed markup tree to yield [`Record`]s. [`SearchExtractor`] adds search
//! query assembly; [`sites`] holds ready-made configurations for supported
//! aggregators.
//!
//! Network fetch is a collaborator concern: callers hand in already-fetched
//! markup and take away records.
//!
//! # Example
//!
//! ```
//! use presswire_extract::sites;
//!
//! # fn main() -> Result<(), presswire_extract::ExtractError> {
//! let mut search = sites::google()?;
//! search.search_term("cats");
//! search.add_site("npr.org");
//!
//! // A collaborator fetches `search.request_url()?` and supplies the markup.
//! let markup = "<html><body></body></html>";
//! let records = search.run_markup(markup)?;
//! assert!(records.is_empty());
//! # Ok(())
//! # }
//! ```

pub mod accessor;
pub mod error;
pub mod extractor;
pub mod record;
pub mod schema;
pub mod search;
pub mod sites;
pub mod value;

pub use crate::accessor::FieldAccessor;
pub use crate::error::ExtractError;
pub use crate::extractor::{Extractor, ExtractorConfig, LinkRewriter, DEFAULT_RESULT_LIMIT};
pub use crate::record::Record;
pub use crate::schema::RecordSchema;
pub use crate::search::{SearchExtractor, DEFAULT_SEARCH_PARAM};
pub use crate::value::{TagMap, TagValue};
