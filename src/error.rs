//! Error types for lexsplit.
//!
//! A single library-level error enum with detailed context for operators,
//! plus a crate-wide `Result` alias.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the lexsplit library.
#[derive(Debug, Error)]
pub enum LexsplitError {
    /// Input file does not exist.
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Input file could not be parsed as JSON.
    #[error("Failed to parse JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output serialization failed.
    #[error("JSON serialization failed: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for lexsplit operations.
pub type Result<T> = std::result::Result<T, LexsplitError>;
