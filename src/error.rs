//! Error types for body construction and consumption.
//!
//! Failures are forwarded to the nearest consumer: the stream reader for
//! streaming bodies, the awaiting caller for buffered ones. Nothing in this
//! crate retries or recovers.

use thiserror::Error;

/// Main error type for body stream operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BodyError {
    /// The underlying producer's iteration step failed
    #[error("body source error: {0}")]
    Source(String),
    /// A chunk could not be encoded into bytes
    #[error("body encoding error: {0}")]
    Encoding(String),
    /// I/O related errors surfaced by the transport
    #[error("body IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BodyError {
    fn from(err: std::io::Error) -> Self {
        BodyError::Io(err.to_string())
    }
}

/// Result type for body operations
pub type BodyResult<T> = Result<T, BodyError>;
