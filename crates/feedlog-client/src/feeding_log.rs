//! Command surface for front ends.

use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, instrument};

use feedlog_core::{FeedingRecord, Gateway, NewFeedingRecord, RecordId};

use crate::confirm::{DeleteConfirmation, DeleteState};
use crate::error::Error;
use crate::store::RecordStore;
use crate::view::{self, DailyStats, SnapshotView};

/// A feeding log bound to one gateway.
///
/// Owns the record store and the delete confirmation machine. Front ends
/// drive it through the command methods and read presentation state back
/// through the view methods; nothing else is shared.
#[derive(Debug)]
pub struct FeedingLog<G> {
    store: RecordStore<G>,
    deletion: DeleteConfirmation,
}

impl<G: Gateway> FeedingLog<G> {
    /// Create a log with an empty, not yet loaded snapshot.
    pub fn new(gateway: G) -> Self {
        Self {
            store: RecordStore::new(gateway),
            deletion: DeleteConfirmation::new(),
        }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &RecordStore<G> {
        &self.store
    }

    /// Reload the snapshot from the gateway.
    pub async fn refresh(&mut self) -> Result<usize, Error> {
        Ok(self.store.refresh().await?)
    }

    /// Store a new record and reload.
    pub async fn add(&mut self, candidate: &NewFeedingRecord) -> Result<FeedingRecord, Error> {
        Ok(self.store.add(candidate).await?)
    }

    /// Ask for `id` to be deleted. Nothing is removed until [`confirm`](Self::confirm).
    pub fn request_delete(&mut self, id: RecordId) -> Result<(), Error> {
        Ok(self.deletion.request(id)?)
    }

    /// Abandon the pending delete, if any.
    pub fn cancel(&mut self) -> Option<RecordId> {
        self.deletion.cancel()
    }

    /// Execute the pending delete.
    ///
    /// The request is cleared before the gateway is called, so the machine
    /// is idle afterwards whether the delete succeeds, fails, or the future
    /// is dropped mid-flight. Returns `Ok(None)` when nothing was pending.
    #[instrument(skip(self))]
    pub async fn confirm(&mut self) -> Result<Option<RecordId>, Error> {
        let Some(id) = self.deletion.confirm() else {
            debug!("No delete pending");
            return Ok(None);
        };

        self.store.remove(id).await?;
        Ok(Some(id))
    }

    pub fn pending_deletion_id(&self) -> Option<RecordId> {
        self.deletion.pending()
    }

    pub fn deletion_state(&self) -> DeleteState {
        self.deletion.state()
    }

    /// The record list as of the current local time.
    pub fn snapshot_view(&self) -> SnapshotView {
        self.snapshot_view_at(Local::now().naive_local())
    }

    pub fn snapshot_view_at(&self, now: NaiveDateTime) -> SnapshotView {
        view::snapshot_view(self.store.status(), self.store.records(), now)
    }

    /// Today's totals in the local calendar.
    pub fn daily_stats(&self) -> DailyStats {
        self.daily_stats_at(Local::now().date_naive())
    }

    pub fn daily_stats_at(&self, today: NaiveDate) -> DailyStats {
        view::daily_stats(self.store.records(), today)
    }
}
