use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::entities::ForecastDay;

/// Location and forecast days a recommendation request is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeatherContext {
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub days: Vec<ForecastDay>,
}

/// Outcome of one AI recommendation request.
///
/// `recommendations` is either the JSON object parsed out of the completion
/// (passed through without schema checks) or a synthesized fallback object
/// carrying `"fallback": true`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub success: bool,
    pub recommendations: Value,
    /// Completion text as received, kept for display and audit.
    pub raw_response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Per-day recommendation in the shape the detailed prompt asks for.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DayRecommendation {
    pub day_number: u32,
    pub date: Option<NaiveDate>,
    pub overall_recommendation: String,
    pub morning_activities: Vec<String>,
    pub afternoon_activities: Vec<String>,
    pub evening_activities: Vec<String>,
    pub dining_recommendations: Vec<String>,
}
