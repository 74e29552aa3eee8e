//! Error types for the metafix engine

use thiserror::Error;

/// Metafix engine error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Path text could not be parsed back into segments.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    /// Keyword was empty after splitting on dots.
    #[error("Empty keyword")]
    EmptyKeyword,
    /// Synthesis requires the document root to be a mapping.
    #[error("Document root is not an object")]
    RootNotObject,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, EngineError>;
