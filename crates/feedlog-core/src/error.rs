//! Error types for feedlog gateways and value types.
//!
//! Gateways report failures through [`Error`]. Higher layers only ever look
//! at the rendered message, so every variant carries enough text to stand
//! on its own in front of a user.

use thiserror::Error;

/// The unified error type for feedlog operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Persistence failures (I/O, encoding, locking).
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Input validation errors (blank feeding type, malformed time).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),
}

/// Storage-level errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing store failed.
    #[error("I/O error: {message}")]
    Io { message: String },

    /// The stored document could not be encoded or decoded.
    #[error("serialization failed: {message}")]
    Serialization { message: String },

    /// The store could not be locked for exclusive access.
    #[error("lock failed: {message}")]
    Lock { message: String },

    /// No further record id can be assigned.
    #[error("record ids exhausted after {last}")]
    IdsExhausted { last: u64 },

    /// The backend is unreachable or refused the request.
    #[error("backend unavailable: {message}")]
    Unavailable { message: String },
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(StorageError::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(StorageError::Serialization {
            message: err.to_string(),
        })
    }
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid feeding type label.
    #[error("invalid feeding type '{value}': {reason}")]
    FeedingType { value: String, reason: String },

    /// Invalid feeding time.
    #[error("invalid feeding time '{value}': {reason}")]
    FeedingTime { value: String, reason: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
