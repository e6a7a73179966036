//! Feeding time type.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Canonical on-disk and display format.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Formats accepted when parsing, most common first.
const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// The local date and time a feeding happened, at minute precision.
///
/// Times carry no timezone: they are wall-clock readings in the user's
/// local calendar. Seconds are accepted on input and dropped.
///
/// # Example
///
/// ```
/// use feedlog_core::FeedingTime;
///
/// let t = FeedingTime::new("2024-03-10T08:30:45").unwrap();
/// assert_eq!(t.to_string(), "2024-03-10T08:30");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedingTime(NaiveDateTime);

impl FeedingTime {
    /// Parse a feeding time from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string matches none of the accepted formats.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref().trim();

        ACCEPTED_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(Self::from_naive)
            .ok_or_else(|| {
                InvalidInputError::FeedingTime {
                    value: s.to_string(),
                    reason: "expected YYYY-MM-DDTHH:MM".to_string(),
                }
                .into()
            })
    }

    /// Build a feeding time from a naive timestamp, truncating to the minute.
    pub fn from_naive(dt: NaiveDateTime) -> Self {
        let time = NaiveTime::from_hms_opt(dt.hour(), dt.minute(), 0).unwrap_or(dt.time());
        Self(NaiveDateTime::new(dt.date(), time))
    }

    /// The current local time, truncated to the minute.
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Returns the calendar date of this feeding.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the time of day of this feeding.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Returns the underlying timestamp.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<NaiveDateTime> for FeedingTime {
    fn from(dt: NaiveDateTime) -> Self {
        Self::from_naive(dt)
    }
}

impl fmt::Display for FeedingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(CANONICAL_FORMAT))
    }
}

impl FromStr for FeedingTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for FeedingTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FeedingTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        FeedingTime::new(&s).map_err(serde::de::Error::custom)
    }
}
