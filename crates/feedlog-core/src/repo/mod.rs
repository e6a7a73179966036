//! Feeding record types.
//!
//! This module defines the records exchanged with a [`Gateway`](crate::Gateway).
//! Storage itself is the gateway's concern.

mod types;

pub use types::{FeedingRecord, NewFeedingRecord};
