//! Record store.
//!
//! The store holds the client's snapshot of the record collection. The
//! gateway stays the source of truth: every successful mutation is
//! followed by a full re-fetch, and the snapshot is only ever replaced
//! wholesale, never patched.

use tracing::{debug, info, instrument, warn};

use feedlog_core::{FeedingRecord, Gateway, NewFeedingRecord, RecordId};

use crate::error::StoreError;

/// Outcome of the most recent snapshot load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No refresh has completed yet.
    #[default]
    NotLoaded,
    /// The snapshot mirrors the gateway as of the last refresh.
    Loaded,
    /// The last refresh failed with this message; the snapshot is empty.
    Failed(String),
}

/// In-memory mirror of the records held by a [`Gateway`].
#[derive(Debug)]
pub struct RecordStore<G> {
    gateway: G,
    records: Vec<FeedingRecord>,
    status: LoadStatus,
}

impl<G: Gateway> RecordStore<G> {
    /// Create an empty, not yet loaded store.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            status: LoadStatus::NotLoaded,
        }
    }

    /// Returns the gateway backing this store.
    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Returns the snapshot in the order the gateway listed it.
    pub fn records(&self) -> &[FeedingRecord] {
        &self.records
    }

    /// Returns the outcome of the last refresh.
    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    /// Number of records in the snapshot.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the snapshot holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record in the snapshot by id.
    pub fn get(&self, id: RecordId) -> Option<&FeedingRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Whether the snapshot holds a record with `id`.
    pub fn contains(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the snapshot with the gateway's current records.
    ///
    /// On failure the snapshot is emptied and the status records the error.
    /// No retry is attempted.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<usize, StoreError> {
        debug!("Loading records");

        match self.gateway.list_all().await {
            Ok(records) => {
                let count = records.len();
                self.records = records;
                self.status = LoadStatus::Loaded;
                info!(count, "Loaded records");
                Ok(count)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "Failed to load records");
                self.records = Vec::new();
                self.status = LoadStatus::Failed(message.clone());
                Err(StoreError::Load(message))
            }
        }
    }

    /// Store a new record, then reload the snapshot.
    ///
    /// A failed create leaves the snapshot untouched. If the create succeeds
    /// but the reload fails, the reload's error is returned.
    #[instrument(skip(self, candidate), fields(feeding_type = %candidate.feeding_type))]
    pub async fn add(&mut self, candidate: &NewFeedingRecord) -> Result<FeedingRecord, StoreError> {
        let created = self.gateway.create(candidate).await.map_err(|e| {
            warn!(error = %e, "Failed to create record");
            StoreError::Write(e.to_string())
        })?;
        info!(id = %created.id, "Created record");

        self.refresh().await?;
        Ok(created)
    }

    /// Delete a record, then reload the snapshot.
    ///
    /// A failed delete leaves the snapshot untouched.
    #[instrument(skip(self))]
    pub async fn remove(&mut self, id: RecordId) -> Result<(), StoreError> {
        self.gateway.delete_by_id(id).await.map_err(|e| {
            warn!(error = %e, "Failed to delete record");
            StoreError::Write(e.to_string())
        })?;
        info!(%id, "Deleted record");

        self.refresh().await?;
        Ok(())
    }
}
