//! Lenient timestamp parsing for stored records.
//!
//! Records are written with RFC 3339 timestamps, but older data directories
//! hold naive ISO-8601 values (`2025-01-02T10:00:00.123456`). Those are read
//! as UTC so existing history survives.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

/// Parses an RFC 3339 or naive ISO-8601 timestamp.
pub fn parse(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDateTime>()
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {}", value)))
}

pub mod option {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => super::parse(&value).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid timestamp: {}", value))
            }),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
#[path = "tests/timestamp_tests.rs"]
mod tests;
