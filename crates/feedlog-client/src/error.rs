//! Error types surfaced to front ends.

use thiserror::Error;

use feedlog_core::types::RecordId;

/// Failures of record store operations.
///
/// Both variants carry the gateway's error text unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Listing records failed; the snapshot has been emptied.
    #[error("failed to load records: {0}")]
    Load(String),

    /// Creating or deleting a record failed; the snapshot is unchanged.
    #[error("failed to save changes: {0}")]
    Write(String),
}

impl StoreError {
    /// Returns the underlying gateway message.
    pub fn message(&self) -> &str {
        match self {
            StoreError::Load(message) | StoreError::Write(message) => message,
        }
    }

    /// Whether a create or delete failed, as opposed to a load.
    pub fn is_write(&self) -> bool {
        matches!(self, StoreError::Write(_))
    }
}

/// Rejected delete confirmation transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfirmError {
    /// Another record is already awaiting confirmation.
    #[error("record {pending} is already awaiting delete confirmation")]
    AlreadyPending { pending: RecordId },
}

/// Errors returned by [`FeedingLog`](crate::FeedingLog) commands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Confirm(#[from] ConfirmError),
}
