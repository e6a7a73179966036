//! File-backed gateway implementation.

use std::path::Path;

use async_trait::async_trait;
use tokio::task;
use tracing::{debug, instrument};

use feedlog_core::Result;
use feedlog_core::error::{Error, StorageError};
use feedlog_core::repo::{FeedingRecord, NewFeedingRecord};
use feedlog_core::traits::Gateway;
use feedlog_core::types::RecordId;

use crate::store::FileStore;

/// Gateway storing feeding records in a local JSON document.
#[derive(Debug, Clone)]
pub struct FileGateway {
    store: FileStore,
}

impl FileGateway {
    /// Create a gateway backed by the JSON document at `path`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            store: FileStore::new(path),
        }
    }

    /// Returns the document path.
    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Run blocking store work off the async executor.
    async fn blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(FileStore) -> Result<T> + Send + 'static,
    {
        let store = self.store.clone();
        task::spawn_blocking(move || f(store))
            .await
            .map_err(|e| {
                Error::Storage(StorageError::Unavailable {
                    message: format!("storage task failed: {}", e),
                })
            })?
    }
}

#[async_trait]
impl Gateway for FileGateway {
    #[instrument(skip(self, record), fields(path = %self.path().display()))]
    async fn create(&self, record: &NewFeedingRecord) -> Result<FeedingRecord> {
        debug!("Creating record");
        let record = record.clone();
        self.blocking(move |store| store.create(&record)).await
    }

    #[instrument(skip(self), fields(path = %self.path().display()))]
    async fn list_all(&self) -> Result<Vec<FeedingRecord>> {
        debug!("Listing records");
        self.blocking(|store| store.list()).await
    }

    #[instrument(skip(self), fields(path = %self.path().display(), %id))]
    async fn delete_by_id(&self, id: RecordId) -> Result<()> {
        debug!("Deleting record");
        self.blocking(move |store| store.delete(id)).await
    }
}
