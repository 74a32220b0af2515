//! Stored record behavior shared by clients and itineraries.
//!
//! Updates are shallow merges: top-level fields of the patch replace the stored
//! ones wholesale, nested objects and arrays included.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entities::{Client, Itinerary};
use crate::enums::EntityKind;
use crate::errors::CoreError;

/// Fields a patch can never overwrite.
const PROTECTED_FIELDS: &[&str] = &["id", "createdAt", "updatedAt"];

/// A record kept in a store, identified by a generated ID.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const KIND: EntityKind;

    fn id(&self) -> &str;

    /// Stamp a freshly created record with its ID and timestamps.
    fn assign_identity(&mut self, id: String, now: DateTime<Utc>);

    /// Refresh the modification timestamp.
    fn touch(&mut self, now: DateTime<Utc>);

    /// Check required-field presence.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] naming the first missing field.
    fn validate(&self) -> Result<(), CoreError>;
}

/// Deserialize a create request body into a validated record.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the body is not a JSON object of the
/// expected shape or lacks a required field.
pub fn from_body<T: Record>(body: Value) -> Result<T, CoreError> {
    if !body.is_object() {
        return Err(CoreError::validation(format!(
            "{} body must be a JSON object",
            T::KIND
        )));
    }
    let record: T = serde_json::from_value(body).map_err(invalid_data::<T>)?;
    record.validate()?;
    Ok(record)
}

fn invalid_data<T: Record>(err: serde_json::Error) -> CoreError {
    CoreError::validation(format!("Invalid {} data: {err}", T::KIND))
}

/// Apply a shallow merge of `patch` over `current`.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the patch is not an object, a field
/// has the wrong type, or the merged record fails [`Record::validate`].
pub fn merge_shallow<T: Record>(current: &T, patch: Value) -> Result<T, CoreError> {
    let Value::Object(patch) = patch else {
        return Err(CoreError::validation(format!(
            "{} update must be a JSON object",
            T::KIND
        )));
    };
    let Value::Object(mut merged) =
        serde_json::to_value(current).map_err(|e| CoreError::Other(e.into()))?
    else {
        return Err(CoreError::validation(format!(
            "{} does not serialize to an object",
            T::KIND
        )));
    };

    for (key, value) in patch {
        if PROTECTED_FIELDS.contains(&key.as_str()) {
            continue;
        }
        merged.insert(key, value);
    }

    let record: T = serde_json::from_value(Value::Object(merged)).map_err(invalid_data::<T>)?;
    record.validate()?;
    Ok(record)
}

fn require(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

impl Record for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_identity(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.updated_at = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn validate(&self) -> Result<(), CoreError> {
        require(&self.first_name, "firstName")?;
        require(&self.last_name, "lastName")
    }
}

impl Record for Itinerary {
    const KIND: EntityKind = EntityKind::Itinerary;

    fn id(&self) -> &str {
        &self.id
    }

    fn assign_identity(&mut self, id: String, now: DateTime<Utc>) {
        self.id = id;
        self.created_at = now;
        self.updated_at = now;
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    fn validate(&self) -> Result<(), CoreError> {
        require(&self.trip_title, "tripTitle")?;
        require(&self.destination, "destination")?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if start > end {
                return Err(CoreError::validation(
                    "startDate must be on or before endDate",
                ));
            }
        }
        Ok(())
    }
}
