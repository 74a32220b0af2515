//! Traveler preferences sent alongside a recommendation request.

use serde::{Deserialize, Deserializer, Serialize};
use wayfarer_core::enums::ExplorationType;

pub const ACTIVITY_TYPES: &[&str] = &[
    "outdoor",
    "indoor",
    "cultural",
    "adventure",
    "relaxation",
    "food",
    "sports",
    "entertainment",
    "shopping",
    "nature",
];

pub const GROUP_SIZES: &[&str] = &["solo", "couple", "small group", "large group", "family"];

pub const BUDGETS: &[&str] = &["low", "medium", "high"];

pub const MOBILITY_LEVELS: &[&str] = &["limited", "normal", "high"];

pub const DEFAULT_GROUP_SIZE: &str = "solo";
pub const DEFAULT_BUDGET: &str = "medium";
pub const DEFAULT_MOBILITY: &str = "normal";
pub const DEFAULT_TRIP_TYPE: &str = "leisure";

/// Preferences as the frontend sends them.
///
/// Every field is optional on the wire and `null` reads as absent. Values are
/// not checked on deserialization; call [`UserPreferences::normalized`] before
/// building a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub exploration_type: ExplorationType,
    #[serde(deserialize_with = "null_as_default")]
    pub time_of_year: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub activity_types: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub group_size: String,
    #[serde(deserialize_with = "null_as_default")]
    pub budget: String,
    #[serde(deserialize_with = "null_as_default")]
    pub mobility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trip_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub client_preferences: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub additional_notes: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            exploration_type: ExplorationType::default(),
            time_of_year: None,
            activity_types: Vec::new(),
            group_size: DEFAULT_GROUP_SIZE.to_string(),
            budget: DEFAULT_BUDGET.to_string(),
            mobility: DEFAULT_MOBILITY.to_string(),
            trip_type: DEFAULT_TRIP_TYPE.to_string(),
            client_preferences: None,
            additional_notes: None,
            interests: Vec::new(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn one_of(value: &str, allowed: &[&str], default: &str) -> String {
    if allowed.contains(&value) {
        value.to_string()
    } else {
        default.to_string()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl UserPreferences {
    /// Preferences for a destination overview, optionally for a season.
    #[must_use]
    pub fn overview(time_of_year: Option<String>) -> Self {
        Self {
            exploration_type: ExplorationType::DestinationOverview,
            time_of_year: non_blank(time_of_year),
            ..Self::default()
        }
    }

    /// Drop unknown activity types and reset out-of-range choices to their
    /// defaults. Blank free-text fields become absent.
    #[must_use]
    pub fn normalized(self) -> Self {
        let activity_types = self
            .activity_types
            .into_iter()
            .filter(|kind| ACTIVITY_TYPES.contains(&kind.as_str()))
            .collect();
        let trip_type = if self.trip_type.trim().is_empty() {
            DEFAULT_TRIP_TYPE.to_string()
        } else {
            self.trip_type
        };

        Self {
            exploration_type: self.exploration_type,
            time_of_year: non_blank(self.time_of_year),
            activity_types,
            group_size: one_of(&self.group_size, GROUP_SIZES, DEFAULT_GROUP_SIZE),
            budget: one_of(&self.budget, BUDGETS, DEFAULT_BUDGET),
            mobility: one_of(&self.mobility, MOBILITY_LEVELS, DEFAULT_MOBILITY),
            trip_type,
            client_preferences: non_blank(self.client_preferences),
            additional_notes: non_blank(self.additional_notes),
            interests: self.interests,
        }
    }

    /// Whether anything beyond the defaults is worth telling the model.
    #[must_use]
    pub fn has_trip_details(&self) -> bool {
        self.group_size != DEFAULT_GROUP_SIZE
            || self.budget != DEFAULT_BUDGET
            || !self.activity_types.is_empty()
            || self.client_preferences.is_some()
            || self.additional_notes.is_some()
    }
}
