//! Synthesized recommendation objects for completions that cannot be used.
//!
//! Every object built here carries `"fallback": true`.

use serde_json::{Value, json};
use wayfarer_core::entities::{DayRecommendation, ForecastDay};

/// Generic destination suggestions, used when no completion is usable.
#[must_use]
pub fn static_fallback(location: &str) -> Value {
    json!({
        "generalTips": [
            format!("Explore top attractions in {location}"),
            "Try local cuisine and specialties",
            "Visit popular neighborhoods",
            "Consider guided tours for cultural insights",
            "Check local events and festivals",
        ],
        "fallback": true,
    })
}

/// One placeholder day per forecast day, pointing readers at the raw text.
///
/// Used when a detailed completion came back as prose instead of JSON.
#[must_use]
pub fn text_fallback(text: &str, days: &[ForecastDay]) -> Value {
    let days: Vec<DayRecommendation> = days
        .iter()
        .zip(1..)
        .map(|(day, day_number)| DayRecommendation {
            day_number,
            date: Some(day.date),
            overall_recommendation: "See full AI response for details".to_string(),
            morning_activities: vec!["Check complete recommendations".to_string()],
            afternoon_activities: vec!["View full AI response".to_string()],
            evening_activities: vec!["See detailed suggestions".to_string()],
            dining_recommendations: vec!["Restaurant recommendations available".to_string()],
        })
        .collect();

    json!({
        "days": days,
        "generalTips": ["Check the detailed AI response for recommendations"],
        "textResponse": text,
        "fallback": true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn day(date: &str) -> ForecastDay {
        serde_json::from_value(json!({"date": date})).unwrap()
    }

    #[test]
    fn static_fallback_names_the_destination() {
        let value = static_fallback("Kyoto");
        let tips = value["generalTips"].as_array().unwrap();
        assert_eq!(tips.len(), 5);
        assert_eq!(tips[0], "Explore top attractions in Kyoto");
        assert_eq!(value["fallback"], true);
    }

    #[test]
    fn text_fallback_has_one_day_per_forecast_day() {
        let days = [day("2024-03-01"), day("2024-03-02")];
        let value = text_fallback("Go to the temples.", &days);

        let out = value["days"].as_array().unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0]["dayNumber"], 1);
        assert_eq!(out[1]["dayNumber"], 2);
        assert_eq!(out[1]["date"], "2024-03-02");
        assert_eq!(out[0]["overallRecommendation"], "See full AI response for details");
        assert_eq!(value["textResponse"], "Go to the temples.");
        assert_eq!(value["fallback"], true);
    }

    #[test]
    fn text_fallback_without_days() {
        let value = text_fallback("prose", &[]);
        assert_eq!(value["days"], json!([]));
        assert_eq!(value["generalTips"].as_array().unwrap().len(), 1);
    }
}
