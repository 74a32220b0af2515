//! Weather-based activity advice for a single day.
//!
//! Thresholds are in imperial units, matching the provider's `us` unit group:
//! wind above 25 mph, heat above 95 °F, cold below 25 °F, UV index above 8.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::WeatherSnapshot;
use crate::enums::OutdoorRating;

const WINDY_MPH: f64 = 25.0;
const HOT_F: f64 = 95.0;
const COLD_F: f64 = 25.0;
const HIGH_UV: f64 = 8.0;

/// Outdoor suitability of a day with a short message and the deciding reason.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActivityAdvice {
    pub recommendation: OutdoorRating,
    pub message: String,
    pub reason: String,
}

impl ActivityAdvice {
    fn new(recommendation: OutdoorRating, message: &str, reason: &str) -> Self {
        Self {
            recommendation,
            message: message.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Classify a day's weather. Checks run in priority order; the first match wins.
///
/// Missing measurements never trigger a threshold, so a day without a
/// temperature ends up as [`OutdoorRating::ModerateOutdoor`] unless its
/// conditions or wind rule it out first.
#[must_use]
pub fn advise(weather: &WeatherSnapshot) -> ActivityAdvice {
    let conditions = weather
        .conditions
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let bad_weather = ["rain", "storm", "snow"]
        .iter()
        .any(|word| conditions.contains(word));

    if bad_weather {
        return ActivityAdvice::new(
            OutdoorRating::StayIndoors,
            "Stay indoors",
            "Poor weather conditions",
        );
    }
    if weather.windspeed.is_some_and(|wind| wind > WINDY_MPH) {
        return ActivityAdvice::new(OutdoorRating::StayIndoors, "Stay indoors", "Very windy");
    }

    let high_uv = weather.uvindex.is_some_and(|uv| uv > HIGH_UV);
    let Some(temp) = weather.temp else {
        return moderate();
    };

    if temp > HOT_F {
        return ActivityAdvice::new(
            OutdoorRating::LimitedOutdoor,
            "Limited outdoor time",
            "Extreme heat - stay hydrated",
        );
    }
    if temp < COLD_F {
        return ActivityAdvice::new(
            OutdoorRating::LimitedOutdoor,
            "Limited outdoor time",
            "Extreme cold - dress warmly",
        );
    }
    if (70.0..=85.0).contains(&temp) && !high_uv {
        return ActivityAdvice::new(
            OutdoorRating::PerfectOutdoor,
            "Perfect for outdoor activities",
            "Ideal conditions",
        );
    }
    if (60.0..=90.0).contains(&temp) {
        let reason = if high_uv {
            "Good weather - use sun protection"
        } else {
            "Good conditions"
        };
        return ActivityAdvice::new(
            OutdoorRating::GoodOutdoor,
            "Great for outdoor activities",
            reason,
        );
    }

    moderate()
}

fn moderate() -> ActivityAdvice {
    ActivityAdvice::new(
        OutdoorRating::ModerateOutdoor,
        "Moderate outdoor conditions",
        "Fair weather",
    )
}
