//! feedlog-client - In-memory mirror of a feeding record collection.
//!
//! [`FeedingLog`] is the single entry point for a front end. It owns a
//! [`RecordStore`] kept in sync with a [`Gateway`](feedlog_core::Gateway),
//! derives presentation views from it, and gates deletions behind an
//! explicit confirmation step.

pub mod confirm;
pub mod error;
mod feeding_log;
pub mod store;
pub mod view;

#[cfg(test)]
mod testing;

pub use confirm::{DeleteConfirmation, DeleteState};
pub use error::{ConfirmError, Error, StoreError};
pub use feeding_log::FeedingLog;
pub use store::{LoadStatus, RecordStore};
pub use view::{DailyStats, RecordRow, RelativeDay, RelativeLabel, SnapshotView};
