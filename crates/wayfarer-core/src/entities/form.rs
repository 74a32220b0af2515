//! Deserializers for fields the itinerary form posts as raw input values.
//!
//! The form sends `""` for anything left blank and `<input type="number">`
//! values as strings. Blank means "not set"; everything else must still parse,
//! and the error names the field.

use chrono::NaiveDate;
use serde::de::{DeserializeOwned, Error};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_TRAVELERS: u32 = 1;

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn optional_date<'de, D>(deserializer: D, field: &str) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("{field} must be a YYYY-MM-DD date")))
}

pub fn start_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_date(deserializer, "startDate")
}

pub fn end_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_date(deserializer, "endDate")
}

pub fn plan_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_date(deserializer, "dailyPlans.date")
}

/// `null` or a blank string become `None`; anything else deserializes as `T`.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(None);
    }
    T::deserialize(value).map(Some).map_err(D::Error::custom)
}

/// Traveler count as a JSON number or a numeric string; blank falls back to
/// the default.
pub fn travelers<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    if is_blank(&value) {
        return Ok(DEFAULT_TRAVELERS);
    }
    let count = match &value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    };
    count
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| D::Error::custom("numberOfTravelers must be a whole number"))
}
