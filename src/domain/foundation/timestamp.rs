//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Parses an ISO 8601 timestamp as the host API emits it.
    ///
    /// A trailing `Z` is normalized to `+00:00` before parsing. Offset-less
    /// values are taken as UTC. Returns `None` for anything unparseable.
    pub fn parse_iso8601(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        let normalized = match raw.strip_suffix('Z') {
            Some(stripped) => format!("{}+00:00", stripped),
            None => raw.to_string(),
        };

        if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
            return Some(Self(dt.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(&normalized, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Self(naive.and_utc()))
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Returns the duration from another timestamp to this one.
    ///
    /// Returns negative duration if other is after self.
    pub fn duration_since(&self, other: &Timestamp) -> Duration {
        self.0.signed_duration_since(other.0)
    }

    /// Creates a new timestamp by subtracting the specified number of days.
    pub fn minus_days(&self, days: i64) -> Self {
        Self(self.0 - Duration::days(days))
    }

    /// Whole years elapsed from this timestamp until `now`.
    ///
    /// Computed as elapsed days divided by 365 with no leap-year
    /// adjustment. Future timestamps yield 0.
    pub fn whole_years_until(&self, now: &Timestamp) -> u32 {
        let days = now.duration_since(self).num_days();
        days.div_euclid(365).max(0) as u32
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}
