//! # Temporal Types — UTC Millisecond Timestamps
//!
//! Defines [`Timestamp`], a UTC-only timestamp truncated to milliseconds.
//! Every timestamp that lands in a certificate document (issuance dates,
//! proof creation times) renders as `YYYY-MM-DDTHH:MM:SS.mmmZ`, the same
//! shape web clients produce with `Date.prototype.toISOString()`.
//!
//! ## Lenient Date Ingestion
//!
//! Issuance dates arrive from callers in whatever form they like.
//! [`Timestamp::from_date_like()`] accepts the common ones and returns
//! `None` for the rest; callers decide how to degrade. Accepted inputs:
//!
//! | Input | Interpretation |
//! |---|---|
//! | RFC 3339 string, any offset | converted to UTC |
//! | `YYYY-MM-DD` | midnight UTC |
//! | `YYYY-MM-DDTHH:MM[:SS[.fff]]` or with a space separator | read as UTC |
//! | JSON number | Unix epoch milliseconds |
//! | `null`, `false` / `true` | epoch milliseconds `0` / `0` / `1` |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::error::BcertError;

/// Naive datetime layouts accepted by [`Timestamp::from_date_like()`].
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A UTC timestamp, truncated to millisecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to milliseconds.
    pub fn now() -> Self {
        Self::from_utc(Utc::now())
    }

    /// Create a timestamp from a `DateTime<Utc>`, truncating sub-millisecond digits.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_millis(dt))
    }

    /// Create a timestamp from Unix epoch milliseconds.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, BcertError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| BcertError::InvalidTimestamp(format!("epoch millis out of range: {millis}")))
    }

    /// Parse an RFC 3339 string with any offset, converting to UTC.
    pub fn parse_rfc3339(s: &str) -> Result<Self, BcertError> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| BcertError::InvalidTimestamp(format!("{s:?}: {e}")))?;
        Ok(Self::from_utc(dt.with_timezone(&Utc)))
    }

    /// Interpret a caller-supplied date-like JSON value.
    ///
    /// `null` and booleans coerce to epoch milliseconds the way a JavaScript
    /// `Date` constructor coerces them. Returns `None` for arrays, objects,
    /// and strings that match no accepted layout. Never fails loudly: an unusable date is a
    /// degraded document, not a rejected request.
    pub fn from_date_like(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Self::from_date_str(s.trim()),
            Value::Number(n) => {
                let millis = match n.as_i64() {
                    Some(i) => i,
                    None => {
                        let f = n.as_f64()?;
                        if !f.is_finite() {
                            return None;
                        }
                        f.trunc() as i64
                    }
                };
                Self::from_epoch_millis(millis).ok()
            }
            Value::Null | Value::Bool(false) => Self::from_epoch_millis(0).ok(),
            Value::Bool(true) => Self::from_epoch_millis(1).ok(),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn from_date_str(s: &str) -> Option<Self> {
        if let Ok(ts) = Self::parse_rfc3339(s) {
            return Some(ts);
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return date.and_hms_opt(0, 0, 0).map(|dt| Self::from_utc(dt.and_utc()));
        }
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
            .map(|dt| Self::from_utc(dt.and_utc()))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Render as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso8601())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_rfc3339(&s).map_err(serde::de::Error::custom)
    }
}

fn truncate_to_millis(dt: DateTime<Utc>) -> DateTime<Utc> {
    let nanos = dt.nanosecond();
    dt.with_nanosecond(nanos - nanos % 1_000_000).unwrap_or(dt)
}
