//! Date/time handling shared by the wire model and the views.
//!
//! The backend stores local date-times without an offset
//! (`2026-01-29T10:00:00`), but older records and some proxies hand back UTC
//! instants (`2026-01-29T01:00:00Z`). Everything here normalises to a
//! [`NaiveDateTime`] in the local time zone.

use chrono::{DateTime, Local, NaiveDateTime};

/// Format sent to the backend.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Format of a `datetime-local` style form input.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used in tables.
pub const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", INPUT_FORMAT];

/// Parse a naive ISO date-time or an offset instant.
///
/// Offset instants are converted to the local time zone.
pub fn parse_flexible(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Local).naive_local());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub fn to_input(value: &NaiveDateTime) -> String {
    value.format(INPUT_FORMAT).to_string()
}

pub fn display(value: &NaiveDateTime) -> String {
    value.format(DISPLAY_FORMAT).to_string()
}

/// Render a raw ISO string for a table cell, `None` when it does not parse.
pub fn display_str(value: &str) -> Option<String> {
    parse_flexible(value).map(|parsed| display(&parsed))
}

/// Serde adapter for date-times on the wire.
///
/// Serialises as [`WIRE_FORMAT`] and deserialises anything
/// [`parse_flexible`] accepts.
pub mod flexible {
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::{parse_flexible, WIRE_FORMAT};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(WIRE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_flexible(&raw).ok_or_else(|| de::Error::custom(format!("invalid date-time: {raw}")))
    }
}
