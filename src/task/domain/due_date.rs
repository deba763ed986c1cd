//! Parsing and serialization for optional due dates.
//!
//! Due dates are calendar dates written as `YYYY-MM-DD`. Date inputs that
//! were left blank arrive as empty strings and mean "no due date".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

use super::TaskDomainError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses form input into an optional due date.
pub(super) fn parse(raw: &str) -> Result<Option<NaiveDate>, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TaskDomainError::InvalidDueDate(raw.to_owned()))
}

/// Formats a due date the way form inputs expect it.
pub(super) fn format(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub(super) fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(d) => serializer.collect_str(&d.format(DATE_FORMAT)),
        None => serializer.serialize_none(),
    }
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(value) => parse(&value).map_err(serde::de::Error::custom),
    }
}
