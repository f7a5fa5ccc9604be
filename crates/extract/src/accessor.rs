// ABOUTME: Field accessors that pull one scalar value out of a markup node.
// ABOUTME: Supports inner-text and attribute extraction with an optional default.

//! Field accessors.
//!
//! An accessor is the smallest unit of the extraction model: one rule for
//! resolving a scalar value from a node, either as inner text or as a named
//! attribute, with an optional fallback default.
//!
//! Key behaviors:
//! - Selectors compile eagerly; a malformed selector fails construction.
//! - Resolution applies the selector below the given scope and takes the
//!   first match in document order.
//! - Inner text is whitespace-normalized (runs collapsed to single spaces).
//! - A missing match returns the default when one is set, otherwise
//!   `ExtractError::NotFound`. Nothing else is absorbed by the default.

use scraper::{ElementRef, Selector};

use crate::error::ExtractError;

/// Normalizes whitespace in a string by collapsing runs of whitespace into single spaces.
pub(crate) fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A rule for resolving one scalar value from a markup node.
#[derive(Debug, Clone)]
pub enum FieldAccessor {
    /// Concatenated text content of the first node matching `selector`.
    InnerText {
        selector: Selector,
        css: String,
        default: Option<String>,
    },
    /// Value of attribute `attr` on the first node matching `selector`.
    ///
    /// A matched element that lacks the attribute counts as no match.
    Attribute {
        selector: Selector,
        css: String,
        attr: String,
        default: Option<String>,
    },
}

impl FieldAccessor {
    /// Creates an inner-text accessor for the given CSS selector.
    pub fn inner_text(css: impl Into<String>) -> Result<Self, ExtractError> {
        let css = css.into();
        let selector = compile(&css)?;
        Ok(FieldAccessor::InnerText {
            selector,
            css,
            default: None,
        })
    }

    /// Creates an attribute accessor for the given CSS selector and attribute name.
    pub fn attribute(
        css: impl Into<String>,
        attr: impl Into<String>,
    ) -> Result<Self, ExtractError> {
        let css = css.into();
        let selector = compile(&css)?;
        Ok(FieldAccessor::Attribute {
            selector,
            css,
            attr: attr.into(),
            default: None,
        })
    }

    /// Attaches a fallback default, returned when no node matches.
    pub fn with_default(mut self, text: impl Into<String>) -> Self {
        match &mut self {
            FieldAccessor::InnerText { default, .. } => *default = Some(text.into()),
            FieldAccessor::Attribute { default, .. } => *default = Some(text.into()),
        }
        self
    }

    /// The original CSS selector string, kept for diagnostics.
    pub fn css(&self) -> &str {
        match self {
            FieldAccessor::InnerText { css, .. } => css,
            FieldAccessor::Attribute { css, .. } => css,
        }
    }

    /// Resolves this accessor against a scope element.
    ///
    /// Applies the selector below `scope` and extracts from the first match.
    /// When nothing matches, the configured default is returned if present,
    /// otherwise `ExtractError::NotFound`.
    ///
    /// Extracted values are cleaned, not byte-exact: inner text is
    /// whitespace-normalized and attribute values are trimmed, so markup
    /// indentation never leaks into record fields.
    pub fn resolve(&self, scope: ElementRef<'_>) -> Result<String, ExtractError> {
        match self {
            FieldAccessor::InnerText {
                selector,
                css,
                default,
            } => {
                let found = scope
                    .select(selector)
                    .next()
                    .map(|el| normalize_whitespace(&el.text().collect::<String>()));
                resolve_or_default(found, default.as_deref(), css)
            }
            FieldAccessor::Attribute {
                selector,
                css,
                attr,
                default,
            } => {
                let found = scope
                    .select(selector)
                    .next()
                    .and_then(|el| el.value().attr(attr))
                    .map(|v| v.trim().to_string());
                resolve_or_default(found, default.as_deref(), css)
            }
        }
    }
}

fn resolve_or_default(
    found: Option<String>,
    default: Option<&str>,
    css: &str,
) -> Result<String, ExtractError> {
    match (found, default) {
        (Some(value), _) => Ok(value),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => Err(ExtractError::not_found(css)),
    }
}

/// Compiles a CSS selector string, mapping parse failures to `ExtractError::Selector`.
pub(crate) fn compile(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::selector(css, e))
}
