//! Record types.

use serde::{Deserialize, Serialize};

use crate::types::{FeedingTime, FeedingType, RecordId};

/// A stored feeding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedingRecord {
    /// Gateway-assigned identifier.
    #[serde(default)]
    pub id: RecordId,

    /// Kind of feeding.
    pub feeding_type: FeedingType,

    /// Volume in milliliters; `0` means not applicable.
    pub amount: u32,

    /// Duration in minutes; `0` means not applicable.
    pub duration: u32,

    /// When the feeding happened (local time).
    pub feeding_time: FeedingTime,

    /// Free-form notes, possibly empty.
    #[serde(default)]
    pub notes: String,
}

/// A feeding record that has not been stored yet.
///
/// Carries every field of [`FeedingRecord`] except the id, which only the
/// gateway may assign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeedingRecord {
    pub feeding_type: FeedingType,
    pub amount: u32,
    pub duration: u32,
    pub feeding_time: FeedingTime,
    #[serde(default)]
    pub notes: String,
}

impl NewFeedingRecord {
    /// Start a candidate with no amount, duration or notes.
    pub fn new(feeding_type: FeedingType, feeding_time: FeedingTime) -> Self {
        Self {
            feeding_type,
            amount: 0,
            duration: 0,
            feeding_time,
            notes: String::new(),
        }
    }

    pub fn with_amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Attach a gateway-assigned id, producing a stored record.
    pub fn into_record(self, id: RecordId) -> FeedingRecord {
        FeedingRecord {
            id,
            feeding_type: self.feeding_type,
            amount: self.amount,
            duration: self.duration,
            feeding_time: self.feeding_time,
            notes: self.notes,
        }
    }
}
