//! Error types for product-page-extract.
//!
//! Extraction is whole-record: any of these errors aborts the page and no
//! partial record is returned. Unknown currency glyphs and tag classes are
//! not errors, they resolve to their `NotFound` sentinels.

/// Error type for extraction operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A required element or attribute is absent from the document.
    #[error("Required element not found: {0}")]
    NotFound(String),

    /// A value is present but cannot be coerced to the expected type.
    #[error("Malformed value: {0}")]
    MalformedValue(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
