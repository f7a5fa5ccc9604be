// ABOUTME: Ready-made search extractors for supported news-aggregator sites.
// ABOUTME: Each submodule bundles the site's selectors into a SearchExtractor.

//! Per-site extractor configurations.
//!
//! The selector strings here are configuration data; the extraction logic
//! lives in [`crate::extractor`]. Each builder returns a fresh
//! [`crate::SearchExtractor`] so concurrent queries never share state.
//!
//! | Site | Builder | Search param |
//! |------|---------|--------------|
//! | Google News | [`google`] | `q` |
//! | Bing News | [`bing`] | `q` |
//! | Yahoo News | [`yahoo`] | `p` |

mod bing;
mod google;
mod yahoo;

pub use bing::bing;
pub use google::google;
pub use yahoo::yahoo;
