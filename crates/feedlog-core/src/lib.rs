//! feedlog-core - Core feeding record types and traits.

pub mod error;
pub mod repo;
pub mod traits;
pub mod types;

pub use error::Error;
pub use repo::{FeedingRecord, NewFeedingRecord};
pub use traits::Gateway;
pub use types::{FeedingTime, FeedingType, RecordId};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
