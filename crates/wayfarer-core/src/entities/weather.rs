use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One forecast day in the flat schema the frontend consumes.
///
/// Every measurement is optional: the provider omits elements it has no data
/// for, and callers echo partial days back into recommendation requests.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ForecastDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub tempmax: Option<f64>,
    #[serde(default)]
    pub tempmin: Option<f64>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub visibility: Option<f64>,
    #[serde(default)]
    pub uvindex: Option<f64>,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Forecast response: reshaped `days` plus every other top-level field the
/// provider returned (`resolvedAddress`, `description`, `timezone`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Forecast {
    pub days: Vec<ForecastDay>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Forecast {
    /// Top-level forecast description, when the provider sent one.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.extra.get("description").and_then(Value::as_str)
    }
}

/// Weather copied into a daily plan at fetch time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeatherSnapshot {
    pub date: NaiveDate,
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub tempmin: Option<f64>,
    #[serde(default)]
    pub tempmax: Option<f64>,
    #[serde(default)]
    pub conditions: Option<String>,
    #[serde(default)]
    pub humidity: Option<f64>,
    #[serde(default)]
    pub windspeed: Option<f64>,
    #[serde(default)]
    pub uvindex: Option<f64>,
}

impl From<&ForecastDay> for WeatherSnapshot {
    fn from(day: &ForecastDay) -> Self {
        Self {
            date: day.date,
            temp: day.temp,
            tempmin: day.tempmin,
            tempmax: day.tempmax,
            conditions: day.conditions.clone(),
            humidity: day.humidity,
            windspeed: day.windspeed,
            uvindex: day.uvindex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_keeps_unknown_top_level_fields() {
        let forecast: Forecast = serde_json::from_str(
            r#"{
                "resolvedAddress": "Paris, France",
                "description": "Cooling down with a chance of rain.",
                "days": [{"date": "2024-06-01", "temp": 68.5}]
            }"#,
        )
        .unwrap();

        assert_eq!(forecast.days.len(), 1);
        assert_eq!(forecast.description(), Some("Cooling down with a chance of rain."));
        assert_eq!(
            forecast.extra.get("resolvedAddress").and_then(Value::as_str),
            Some("Paris, France")
        );

        let json = serde_json::to_value(&forecast).unwrap();
        assert_eq!(json["resolvedAddress"], "Paris, France");
        assert_eq!(json["days"][0]["temp"], 68.5);
    }

    #[test]
    fn snapshot_copies_forecast_measurements() {
        let day: ForecastDay = serde_json::from_str(
            r#"{"date": "2024-06-01", "temp": 71.5, "tempmin": 60.0, "tempmax": 80.5,
                "conditions": "Clear", "humidity": 40.0, "windspeed": 8.0, "uvindex": 7.0,
                "icon": "clear-day"}"#,
        )
        .unwrap();
        let snapshot = WeatherSnapshot::from(&day);
        assert_eq!(snapshot.temp, Some(71.5));
        assert_eq!(snapshot.conditions.as_deref(), Some("Clear"));
        assert_eq!(snapshot.uvindex, Some(7.0));
    }
}
