//! Error types for the Gutensearch library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`GutensearchError`] enum defined here.

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Gutensearch operations.
///
/// This enum represents all possible errors that can occur in the library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation
/// and provides convenient constructor methods for creating specific error
/// types.
#[derive(Error, Debug)]
pub enum GutensearchError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Index-related errors
    #[error("Index error: {0}")]
    Index(String),

    /// Query-related errors (parsing, invalid queries, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Serialization errors (CSV reports, etc.)
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with GutensearchError.
pub type Result<T> = std::result::Result<T, GutensearchError>;

impl GutensearchError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        GutensearchError::Analysis(msg.into())
    }

    /// Create a new index error.
    pub fn index<S: Into<String>>(msg: S) -> Self {
        GutensearchError::Index(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        GutensearchError::Query(msg.into())
    }

    /// Create a new serialization error.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        GutensearchError::Serialization(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GutensearchError::Other(msg.into())
    }
}
