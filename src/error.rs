//! Custom error types for dirstash
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for dirstash operations
#[derive(Error, Debug)]
pub enum StashError {
    /// Configuration-related errors (e.g. no resolvable data directory)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid or unusable encryption key material
    #[error("Key error: {0}")]
    Key(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Stored data that cannot be decoded (truncated blob, malformed plaintext)
    #[error("Corrupt bookmark data: {0}")]
    Corrupt(String),

    /// Authentication tag mismatch when decrypting the bookmark file
    #[error("Decryption failed: invalid key or corrupted data")]
    AuthFailure,

    /// Encryption-layer failures other than authentication
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Invalid bookmark index argument
    #[error("Index error: {0}")]
    Index(String),
}

impl From<std::io::Error> for StashError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for dirstash operations
pub type StashResult<T> = Result<T, StashError>;
