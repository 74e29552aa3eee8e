//! Error types for the metafix I/O layer

use std::path::PathBuf;
use thiserror::Error;

/// Metafix I/O error types
#[derive(Debug, Error)]
pub enum IoError {
    /// A document could not be parsed as JSON.
    #[error("Malformed document {path}: {source}")]
    MalformedDocument {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
    /// A rules file was missing or unreadable.
    #[error("Rules file not found: {0}")]
    RulesNotFound(PathBuf),
    /// A rules file did not have the expected JSON shape.
    #[error("Invalid rules file {path}: {reason}")]
    InvalidRules {
        /// Offending file
        path: PathBuf,
        /// What was wrong with it
        reason: String,
    },
    /// The discovery folder pattern was not a valid glob.
    #[error("Invalid folder pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O operation failed while reading or writing a file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, IoError>;
