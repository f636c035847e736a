//! Serde helpers for optional timestamps written as `YYYY-MM-DD HH:MM:SS.ffffff`.
//!
//! A missing timestamp is serialized as an empty field.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
/// Accepts the written form as well as values without a fractional part.
const PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(timestamp) => serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT)),
        None => serializer.serialize_none()
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;

    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDateTime::parse_from_str(text, PARSE_FORMAT)
            .map(|naive| Some(naive.and_utc()))
            .map_err(de::Error::custom)
    }
}
