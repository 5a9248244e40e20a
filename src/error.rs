//! Error types for the word frequency library.
//!
//! This module defines all error types that can occur while loading input,
//! resolving configuration, and exporting reports.

use std::path::PathBuf;

/// Result type alias for word frequency operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during a word frequency run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input or stopword file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Exported report could not be written
    #[error("Failed to write {}: {source}", path.display())]
    FileWrite {
        /// Path that was being written
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },

    /// Language selector has no stopword file mapped to it
    #[error("Unknown language '{0}': no stopword file configured")]
    UnknownLanguage(String),

    /// Output format tag not recognized
    #[error("Unsupported output format: {0} (expected json, csv, or console)")]
    UnsupportedFormat(String),

    /// Configuration value out of range or inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
