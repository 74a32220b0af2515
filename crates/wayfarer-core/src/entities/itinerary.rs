use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::advice::ActivityAdvice;
use crate::entities::WeatherSnapshot;
use crate::entities::form::{self, DEFAULT_TRAVELERS};

/// A planned trip.
///
/// `clientId` and `clientName` are both optional and neither is checked
/// against the client store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub trip_title: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub destination: String,
    #[serde(default, deserialize_with = "form::start_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "form::end_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub end_date: Option<NaiveDate>,
    #[serde(default = "default_travelers", deserialize_with = "form::travelers")]
    #[schemars(with = "u32")]
    pub number_of_travelers: u32,
    #[serde(default)]
    pub trip_type: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub daily_plans: Vec<DailyPlan>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

const fn default_travelers() -> u32 {
    DEFAULT_TRAVELERS
}

/// One itinerary day: a denormalized weather copy plus the planned activities.
///
/// Rows typed into the form may have no date yet.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    #[serde(default, deserialize_with = "form::plan_date")]
    #[schemars(with = "Option<NaiveDate>")]
    pub date: Option<NaiveDate>,
    /// Copied from the forecast when the plan was assembled; never refreshed
    /// implicitly.
    #[serde(default, deserialize_with = "form::blank_as_none")]
    #[schemars(with = "Option<PlanWeather>")]
    pub weather: Option<PlanWeather>,
    #[serde(default)]
    pub activities: Activities,
    #[serde(default)]
    pub advice: Option<ActivityAdvice>,
}

/// A day's weather: a forecast snapshot, or a note typed by an agent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(untagged)]
pub enum PlanWeather {
    Forecast(WeatherSnapshot),
    Note(String),
}

/// Planned activities: free text typed by an agent, or a structured list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(untagged)]
pub enum Activities {
    Text(String),
    List(Vec<String>),
}

impl Default for Activities {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activities_accepts_text_or_list() {
        let text: Activities = serde_json::from_str("\"Museum in the morning\"").unwrap();
        assert_eq!(text, Activities::Text("Museum in the morning".into()));

        let list: Activities = serde_json::from_str(r#"["Museum", "Harbor walk"]"#).unwrap();
        assert_eq!(
            list,
            Activities::List(vec!["Museum".into(), "Harbor walk".into()])
        );
    }

    #[test]
    fn itinerary_defaults_fill_missing_fields() {
        let itinerary: Itinerary = serde_json::from_str(
            r#"{"tripTitle": "Spring in Lisbon", "destination": "Lisbon"}"#,
        )
        .unwrap();
        assert_eq!(itinerary.number_of_travelers, 1);
        assert!(itinerary.daily_plans.is_empty());
        assert!(itinerary.client_id.is_none());
        assert!(itinerary.start_date.is_none());
    }

    #[test]
    fn blank_form_values_mean_unset() {
        let itinerary: Itinerary = serde_json::from_value(serde_json::json!({
            "tripTitle": "Trip",
            "destination": "Rome",
            "startDate": "",
            "endDate": null,
            "numberOfTravelers": "",
            "dailyPlans": [{"date": "", "weather": "", "activities": ""}]
        }))
        .unwrap();
        assert!(itinerary.start_date.is_none());
        assert!(itinerary.end_date.is_none());
        assert_eq!(itinerary.number_of_travelers, 1);
        assert_eq!(itinerary.daily_plans[0].date, None);
        assert_eq!(itinerary.daily_plans[0].weather, None);
    }

    #[test]
    fn travelers_accepts_numeric_strings() {
        let itinerary: Itinerary = serde_json::from_value(serde_json::json!({
            "numberOfTravelers": " 4 "
        }))
        .unwrap();
        assert_eq!(itinerary.number_of_travelers, 4);

        let err = serde_json::from_value::<Itinerary>(serde_json::json!({
            "numberOfTravelers": "a few"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("numberOfTravelers"));
    }

    #[test]
    fn malformed_date_names_the_field() {
        let err = serde_json::from_value::<Itinerary>(serde_json::json!({
            "endDate": "06/03/2024"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("endDate must be a YYYY-MM-DD date"));
    }

    #[test]
    fn plan_weather_accepts_snapshot_or_note() {
        let plans: Vec<DailyPlan> = serde_json::from_value(serde_json::json!([
            {"date": "2024-06-01", "weather": "72°F - Clear"},
            {"date": "2024-06-02", "weather": {"date": "2024-06-02", "temp": 70.0}}
        ]))
        .unwrap();
        assert_eq!(
            plans[0].weather,
            Some(PlanWeather::Note("72°F - Clear".into()))
        );
        assert!(matches!(
            plans[1].weather,
            Some(PlanWeather::Forecast(ref snapshot)) if snapshot.temp == Some(70.0)
        ));
    }
}
