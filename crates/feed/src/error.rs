// ABOUTME: Error types for feed rendering operations.
// ABOUTME: Provides FeedError with Serialize, Io, and Utf8 variants.

use thiserror::Error;

/// Errors that can occur while rendering or writing a feed document.
#[derive(Debug, Error)]
pub enum FeedError {
    /// An extras key or value cannot be rendered in the target format,
    /// e.g. a non-finite float in JSON or a key that is not a valid XML
    /// element name.
    #[error("cannot serialize '{key}': {reason}")]
    Serialize { key: String, reason: String },

    /// Event-writer or file I/O failure.
    #[error("feed write failed")]
    Io(#[from] std::io::Error),

    /// JSON serialization failure.
    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),

    /// XML event-writer failure.
    #[error("XML write failed")]
    Xml(#[from] quick_xml::Error),

    /// The rendered XML buffer was not valid UTF-8.
    #[error("rendered feed is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl FeedError {
    /// Creates a Serialize error for the given key.
    pub fn serialize(key: impl Into<String>, reason: impl Into<String>) -> Self {
        FeedError::Serialize {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if this is a Serialize error.
    pub fn is_serialize(&self) -> bool {
        matches!(self, FeedError::Serialize { .. })
    }
}
