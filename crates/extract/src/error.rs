// ABOUTME: Error types for the extraction pipeline.
// ABOUTME: Provides ExtractError with NotFound, Selector, and BaseUrl variants.

use thiserror::Error;

/// Errors that can occur while building schemas or running an extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A required accessor matched no node and had no configured default.
    ///
    /// This aborts the entire extraction run rather than skipping the
    /// offending record.
    #[error("no node matched selector '{selector}' and no default was set")]
    NotFound { selector: String },

    /// A selector string failed to compile. Surfaced at construction time.
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    /// The configured base URL could not be parsed when assembling the
    /// outbound request URL.
    #[error("invalid base URL '{url}'")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ExtractError {
    /// Creates a NotFound error for the given selector string.
    pub fn not_found(selector: impl Into<String>) -> Self {
        ExtractError::NotFound {
            selector: selector.into(),
        }
    }

    /// Creates a Selector error from a selector string and parse failure.
    pub fn selector(selector: impl Into<String>, message: impl ToString) -> Self {
        ExtractError::Selector {
            selector: selector.into(),
            message: message.to_string(),
        }
    }

    /// Returns true if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExtractError::NotFound { .. })
    }

    /// Returns true if this is a Selector error.
    pub fn is_selector(&self) -> bool {
        matches!(self, ExtractError::Selector { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ExtractError::not_found("div.missing");
        assert_eq!(
            err.to_string(),
            "no node matched selector 'div.missing' and no default was set"
        );
        assert!(err.is_not_found());
        assert!(!err.is_selector());
    }

    #[test]
    fn test_selector_display() {
        let err = ExtractError::selector("[[[bad", "unexpected token");
        assert!(err.to_string().contains("[[[bad"));
        assert!(err.is_selector());
    }
}
