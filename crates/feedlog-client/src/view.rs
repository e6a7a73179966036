//! Presentation views derived from a record snapshot.
//!
//! Everything here is a pure function of its arguments. The caller supplies
//! "now" in its own local calendar, so day boundaries are calendar-day
//! boundaries rather than rolling 24 hour windows.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};

use feedlog_core::{FeedingRecord, FeedingTime};

use crate::store::LoadStatus;

/// Records ordered by feeding time, most recent first.
///
/// The sort is stable: records sharing a timestamp keep snapshot order.
pub fn sorted_descending(records: &[FeedingRecord]) -> Vec<&FeedingRecord> {
    let mut sorted: Vec<&FeedingRecord> = records.iter().collect();
    sorted.sort_by(|a, b| b.feeding_time.cmp(&a.feeding_time));
    sorted
}

/// Calendar-day classification of a timestamp relative to now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Yesterday,
    Other,
}

/// A timestamp paired with its relative day, ready for display.
///
/// Renders as `Today 08:30`, `Yesterday 23:59`, or `03/08 10:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelativeLabel {
    pub day: RelativeDay,
    pub time: FeedingTime,
}

impl fmt::Display for RelativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ts = self.time.as_naive();
        match self.day {
            RelativeDay::Today => write!(f, "Today {}", ts.format("%H:%M")),
            RelativeDay::Yesterday => write!(f, "Yesterday {}", ts.format("%H:%M")),
            RelativeDay::Other => write!(f, "{}", ts.format("%m/%d %H:%M")),
        }
    }
}

/// Classify `timestamp` against the calendar date of `now`.
///
/// Future dates and anything two or more days back fall through to
/// [`RelativeDay::Other`].
pub fn relative_label(timestamp: FeedingTime, now: NaiveDateTime) -> RelativeLabel {
    let days_back = now
        .date()
        .signed_duration_since(timestamp.date())
        .num_days();

    let day = match days_back {
        0 => RelativeDay::Today,
        1 => RelativeDay::Yesterday,
        _ => RelativeDay::Other,
    };

    RelativeLabel {
        day,
        time: timestamp,
    }
}

/// Aggregates over the records of a single calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DailyStats {
    /// Number of feedings that day.
    pub count: usize,
    /// Total milliliters that day; zero-amount feedings add nothing.
    pub total_amount: u64,
}

/// Count and total amount of the feedings on `today`.
pub fn daily_stats(records: &[FeedingRecord], today: NaiveDate) -> DailyStats {
    records
        .iter()
        .filter(|r| r.feeding_time.date() == today)
        .fold(DailyStats::default(), |mut stats, r| {
            stats.count += 1;
            stats.total_amount += u64::from(r.amount);
            stats
        })
}

/// One line of the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub record: FeedingRecord,
    pub label: RelativeLabel,
}

impl RecordRow {
    /// Amount in milliliters, if one was recorded.
    pub fn amount_ml(&self) -> Option<u32> {
        (self.record.amount > 0).then_some(self.record.amount)
    }

    /// Duration in minutes, if one was recorded.
    pub fn duration_min(&self) -> Option<u32> {
        (self.record.duration > 0).then_some(self.record.duration)
    }

    pub fn notes(&self) -> Option<&str> {
        let notes = self.record.notes.as_str();
        (!notes.is_empty()).then_some(notes)
    }
}

/// What a front end should show for the record list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotView {
    /// Nothing has been loaded yet.
    NotLoaded,
    /// Loading failed; no records are available.
    Unavailable { reason: String },
    /// The gateway holds no records.
    Empty,
    /// Records, most recent first.
    Records(Vec<RecordRow>),
}

impl SnapshotView {
    /// Returns the rows, or an empty slice for the non-list states.
    pub fn rows(&self) -> &[RecordRow] {
        match self {
            SnapshotView::Records(rows) => rows.as_slice(),
            _ => &[],
        }
    }
}

/// Build the list view for a snapshot and its load status.
pub fn snapshot_view(
    status: &LoadStatus,
    records: &[FeedingRecord],
    now: NaiveDateTime,
) -> SnapshotView {
    match status {
        LoadStatus::NotLoaded => SnapshotView::NotLoaded,
        LoadStatus::Failed(reason) => SnapshotView::Unavailable {
            reason: reason.clone(),
        },
        LoadStatus::Loaded if records.is_empty() => SnapshotView::Empty,
        LoadStatus::Loaded => SnapshotView::Records(
            sorted_descending(records)
                .into_iter()
                .map(|record| RecordRow {
                    label: relative_label(record.feeding_time, now),
                    record: record.clone(),
                })
                .collect(),
        ),
    }
}
