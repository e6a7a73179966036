//! Gateway trait.

use async_trait::async_trait;

use crate::Result;
use crate::repo::{FeedingRecord, NewFeedingRecord};
use crate::types::RecordId;

/// The persistence boundary that owns the feeding record collection.
///
/// Implementations are the source of truth; clients only ever hold a cached
/// copy of what [`list_all`](Gateway::list_all) returns.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Store a new record, returning it with its assigned id.
    async fn create(&self, record: &NewFeedingRecord) -> Result<FeedingRecord>;

    /// List every stored record in storage order.
    async fn list_all(&self) -> Result<Vec<FeedingRecord>>;

    /// Delete the record with the given id.
    async fn delete_by_id(&self, id: RecordId) -> Result<()>;
}

#[async_trait]
impl<G> Gateway for std::sync::Arc<G>
where
    G: Gateway + ?Sized,
{
    async fn create(&self, record: &NewFeedingRecord) -> Result<FeedingRecord> {
        (**self).create(record).await
    }

    async fn list_all(&self) -> Result<Vec<FeedingRecord>> {
        (**self).list_all().await
    }

    async fn delete_by_id(&self, id: RecordId) -> Result<()> {
        (**self).delete_by_id(id).await
    }
}
