//! Serde support for the backend's `renew` field.
//!
//! - Serialize: `Option<NaiveDate>` -> `"YYYY-MM-DD"` or `""`
//! - Deserialize: `"YYYY-MM-DD"`, an RFC 3339 timestamp (date part taken), `""` or `null`

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format of a calendar date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `renew` value.
///
/// Blank strings mean "no expiry date". Timestamps keep the date as written,
/// without converting to the local timezone.
pub fn parse_renew_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Ok(Some(date));
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|e| format!("Invalid renew date '{value}': {e}"))
}

/// Format an optional date the way the backend stores it.
pub fn format_renew_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Serialize `Option<NaiveDate>` as `"YYYY-MM-DD"` or `""`.
#[allow(clippy::ref_option)]
pub fn serialize<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_renew_date(*date))
}

/// Deserialize a string or `null` into `Option<NaiveDate>`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_renew_date(&s).map_err(Error::custom),
        None => Ok(None),
    }
}
