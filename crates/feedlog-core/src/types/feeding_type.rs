//! Feeding type label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// Category of a feeding (for example `breast`, `bottle`, `solid`).
///
/// The label is free-form but never blank; surrounding whitespace is
/// trimmed on construction.
///
/// # Example
///
/// ```
/// use feedlog_core::FeedingType;
///
/// let kind = FeedingType::new("  bottle ").unwrap();
/// assert_eq!(kind.as_str(), "bottle");
/// assert!(FeedingType::new("   ").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FeedingType(String);

impl FeedingType {
    /// Create a new feeding type, rejecting blank labels.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(InvalidInputError::FeedingType {
                value: s,
                reason: "cannot be empty".to_string(),
            }
            .into());
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Returns the label.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FeedingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FeedingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for FeedingType {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<FeedingType> for String {
    fn from(kind: FeedingType) -> Self {
        kind.0
    }
}

impl AsRef<str> for FeedingType {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
