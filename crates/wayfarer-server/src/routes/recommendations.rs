//! AI recommendation routes.
//!
//! Both routes answer 200 with an envelope once the request itself is valid;
//! a failed model call shows up as `success: false` with fallback data.

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::Value;
use wayfarer_core::entities::{RecommendationResult, WeatherContext};
use wayfarer_core::responses::RecommendationEnvelope;
use wayfarer_recommend::UserPreferences;

use super::{AI_RECOMMENDATIONS_PATH, EXPLORE_DESTINATION_PATH};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(AI_RECOMMENDATIONS_PATH, post(ai_recommendations))
        .route(EXPLORE_DESTINATION_PATH, post(explore_destination))
}

fn envelope(data: RecommendationResult) -> Json<RecommendationEnvelope> {
    Json(RecommendationEnvelope {
        success: data.success,
        data,
        timestamp: Utc::now(),
    })
}

fn weather_context(body: &Value) -> Result<WeatherContext, ApiError> {
    let weather = body
        .get("weatherData")
        .filter(|w| w.get("days").is_some_and(Value::is_array))
        .ok_or_else(|| ApiError::bad_request("Weather data is required"))?;
    serde_json::from_value(weather.clone())
        .map_err(|e| ApiError::bad_request(format!("Invalid weather data: {e}")))
}

fn user_preferences(body: &Value) -> Result<UserPreferences, ApiError> {
    match body.get("userPreferences") {
        None | Some(Value::Null) => Ok(UserPreferences::default()),
        Some(prefs) => serde_json::from_value(prefs.clone())
            .map_err(|e| ApiError::bad_request(format!("Invalid user preferences: {e}"))),
    }
}

async fn ai_recommendations(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RecommendationEnvelope>, ApiError> {
    let context = weather_context(&body)?;
    let preferences = user_preferences(&body)?;

    let result = state
        .recommender
        .recommend_or_fallback(&context, preferences)
        .await;
    Ok(envelope(result))
}

async fn explore_destination(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<RecommendationEnvelope>, ApiError> {
    let destination = body
        .get("destination")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| ApiError::bad_request("Destination is required"))?;
    let time_of_year = body
        .get("timeOfYear")
        .and_then(Value::as_str)
        .map(str::to_string);

    let result = state.recommender.explore(destination, time_of_year).await;
    Ok(envelope(result))
}
