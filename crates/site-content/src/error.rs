//! Error types for content resolution operations
//!
//! Note that `ContentResolver::resolve` never returns these: override
//! failures are absorbed so a page render can always fall back to the
//! baseline document. The error type exists for loader implementations
//! and for callers that want to load override documents directly.

use thiserror::Error;

/// Errors that can occur while loading locale override documents
#[derive(Error, Debug)]
pub enum ContentError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// Failed to read an override file
    #[error("Failed to read override file: {path}")]
    OverrideReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse an override document
    #[error("Failed to parse override document {path}: {source}")]
    OverrideParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for content operations
pub type ContentResult<T> = Result<T, ContentError>;
