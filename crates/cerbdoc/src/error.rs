//! Error types for cerbdoc operations.
//!
//! Errors are categorized into two main types:
//!
//! - **`Error`**: Top-level errors that halt operations (I/O failures, etc.)
//! - **`DocError`**: Document-level errors that are collected but don't halt indexing
//!
//! ## Error Philosophy
//!
//! Cerbdoc follows a "best effort" approach for indexing:
//! - A single unreadable document shouldn't prevent indexing the rest
//! - Errors are collected and reported, not thrown
//! - Only infrastructure failures (I/O on the workspace itself) cause early termination
//!
//! The symbol parser itself is infallible: malformed documentation yields
//! fewer symbols, never an error.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for cerbdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for cerbdoc operations.
///
/// These errors represent infrastructure failures that prevent
/// the operation from completing.
#[derive(Debug, Error)]
pub enum Error {
    /// File system operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A document URI could not be mapped back to a filesystem path
    #[error("invalid document URI: {0}")]
    Uri(String),

    /// Invalid configuration or arguments
    #[error("configuration error: {0}")]
    Config(String),
}

/// Error encountered while indexing a specific document.
///
/// These errors are collected during indexing but don't halt the operation.
/// The indexer continues with remaining documents and reports all errors at the end.
#[derive(Debug, Clone)]
pub struct DocError {
    /// Path to the document that failed
    pub path: PathBuf,
    /// Category of the error
    pub kind: DocErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl std::fmt::Display for DocError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.path.display(),
            self.message,
            self.kind
        )
    }
}

impl std::error::Error for DocError {}

/// Categorization of document-level errors.
///
/// Uses a 4xx/5xx style pattern:
/// - Input problems are issues with the documents (user can fix)
/// - Internal problems are issues with the host environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocErrorKind {
    // === Input Problems (analogous to HTTP 4xx) ===
    /// Document content is not valid UTF-8
    EncodingError,

    // === Internal Problems (analogous to HTTP 5xx) ===
    /// Could not read the document from disk
    IoError,
}

impl std::fmt::Display for DocErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EncodingError => write!(f, "encoding error"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl DocErrorKind {
    /// Returns `true` if this is an input problem (4xx-style).
    ///
    /// Input problems are issues with the documents that the user can fix.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EncodingError)
    }

    /// Returns `true` if this is an internal problem (5xx-style).
    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        matches!(self, Self::IoError)
    }
}

impl DocError {
    /// Create a new document error.
    #[must_use]
    pub fn new(path: PathBuf, kind: DocErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
        }
    }

    /// Create an encoding error for a document.
    #[must_use]
    pub fn encoding_error(path: PathBuf) -> Self {
        Self::new(
            path,
            DocErrorKind::EncodingError,
            "document is not valid UTF-8",
        )
    }

    /// Create an I/O error for a document.
    #[must_use]
    pub fn io_error(path: PathBuf, error: &std::io::Error) -> Self {
        Self::new(path, DocErrorKind::IoError, error.to_string())
    }
}
