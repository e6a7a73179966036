//! Two-step delete confirmation.
//!
//! A delete request only captures the target id. Nothing is removed until
//! the request is confirmed, and at most one request is outstanding.

use tracing::debug;

use feedlog_core::RecordId;

use crate::error::ConfirmError;

/// State of the delete confirmation machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteState {
    #[default]
    Idle,
    AwaitingConfirmation(RecordId),
}

/// Holds at most one delete request awaiting confirmation.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfirmation {
    state: DeleteState,
}

impl DeleteConfirmation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DeleteState {
        self.state
    }

    /// Returns the id awaiting confirmation, if any.
    pub fn pending(&self) -> Option<RecordId> {
        match self.state {
            DeleteState::Idle => None,
            DeleteState::AwaitingConfirmation(id) => Some(id),
        }
    }

    /// Capture `id` for deletion.
    ///
    /// Repeating the request for the id already pending is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfirmError::AlreadyPending`] if a different id is awaiting
    /// confirmation; the pending request is kept.
    pub fn request(&mut self, id: RecordId) -> Result<(), ConfirmError> {
        match self.state {
            DeleteState::AwaitingConfirmation(pending) if pending != id => {
                debug!(%pending, requested = %id, "Delete already pending, rejecting request");
                Err(ConfirmError::AlreadyPending { pending })
            }
            _ => {
                debug!(%id, "Delete requested");
                self.state = DeleteState::AwaitingConfirmation(id);
                Ok(())
            }
        }
    }

    /// Drop the pending request, returning its id. No-op when idle.
    pub fn cancel(&mut self) -> Option<RecordId> {
        let pending = self.take();
        if let Some(id) = pending {
            debug!(%id, "Delete cancelled");
        }
        pending
    }

    /// Return to idle, handing back the id to delete. No-op when idle.
    pub fn confirm(&mut self) -> Option<RecordId> {
        let pending = self.take();
        if let Some(id) = pending {
            debug!(%id, "Delete confirmed");
        }
        pending
    }

    fn take(&mut self) -> Option<RecordId> {
        let pending = self.pending();
        self.state = DeleteState::Idle;
        pending
    }
}
