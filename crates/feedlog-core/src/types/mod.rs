//! Core feeding record value types.
//!
//! These types enforce record invariants at construction time,
//! so a record holding a blank label or an unparsable time cannot exist.

mod feeding_time;
mod feeding_type;
mod record_id;

pub use feeding_time::FeedingTime;
pub use feeding_type::FeedingType;
pub use record_id::RecordId;
