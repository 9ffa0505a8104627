//! Clock time parsing and serde helpers.
//!
//! Clock times carry no date. They are accepted as `HH:MM` or `HH:MM:SS`
//! and written back as `HH:MM`.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serializer};

const SHORT_FORMAT: &str = "%H:%M";
const LONG_FORMAT: &str = "%H:%M:%S";

/// Parses a clock time in `HH:MM` or `HH:MM:SS` form.
///
/// # Example
///
/// ```
/// use work_hours_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// assert_eq!(parse_clock_time("08:30"), Some(NaiveTime::from_hms_opt(8, 30, 0).unwrap()));
/// assert_eq!(parse_clock_time("17:45:10"), Some(NaiveTime::from_hms_opt(17, 45, 10).unwrap()));
/// assert_eq!(parse_clock_time("8 o'clock"), None);
/// ```
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, SHORT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, LONG_FORMAT))
        .ok()
}

/// Formats a clock time, dropping seconds when they are zero.
pub fn format_clock_time(time: &NaiveTime) -> String {
    if time.second() == 0 {
        time.format(SHORT_FORMAT).to_string()
    } else {
        time.format(LONG_FORMAT).to_string()
    }
}

/// Serializes a clock time.
pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_clock_time(time))
}

/// Deserializes a clock time.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_clock_time(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid clock time: {}", raw)))
}

/// Serde helpers for optional clock times (`null` or missing means absent).
pub mod option {
    use super::*;

    /// Serializes an optional clock time.
    pub fn serialize<S: Serializer>(
        time: &Option<NaiveTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match time {
            Some(time) => serializer.serialize_some(&format_clock_time(time)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional clock time. Empty strings count as absent.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveTime>, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_clock_time(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid clock time: {}", raw))),
        }
    }
}
