//! Temporal values normalized to UTC

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{FlattextError, Result};

/// A point in time, stored as UTC.
///
/// The canonical text form is ISO-8601 with millisecond precision and a
/// `Z` suffix, e.g. `2024-01-01T00:00:00.000Z`. [`Timestamp::parse`]
/// accepts that form (and any RFC 3339 offset, which is re-normalized to
/// UTC), so the canonical form round-trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// The current instant
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create from milliseconds since the Unix epoch.
    ///
    /// Returns `None` if the instant is outside chrono's representable
    /// range.
    pub fn from_timestamp_millis(millis: i64) -> Option<Self> {
        DateTime::<Utc>::from_timestamp_millis(millis).map(Self)
    }

    /// Parse from ISO-8601 / RFC 3339 text
    pub fn parse(text: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(text)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|_| FlattextError::InvalidTimestamp(text.to_string()))
    }

    /// Canonical ISO-8601 UTC text with millisecond precision
    pub fn to_iso_string(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}
