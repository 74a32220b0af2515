//! Weather provider proxy routes.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;
use wayfarer_core::entities::Forecast;
use wayfarer_core::planning::DateRange;

use super::{CURRENT_WEATHER_PATH, FORECAST_PATH};
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(FORECAST_PATH, get(forecast))
        .route(CURRENT_WEATHER_PATH, get(current))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ForecastParams {
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentParams {
    location: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

async fn forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastParams>,
) -> Result<Json<Forecast>, ApiError> {
    let (Some(location), Some(start), Some(end)) = (
        present(params.location.as_ref()),
        present(params.start_date.as_ref()),
        present(params.end_date.as_ref()),
    ) else {
        return Err(ApiError::bad_request(
            "Missing required parameters: location, startDate, endDate",
        ));
    };
    let range = DateRange::parse(start, end)?;

    let forecast = state
        .weather
        .forecast(location, range)
        .await
        .map_err(|e| ApiError::weather(&e))?;
    if forecast.days.len() < range.day_count() {
        tracing::warn!(
            location,
            requested = range.day_count(),
            returned = forecast.days.len(),
            "forecast is missing days"
        );
    }
    Ok(Json(forecast))
}

async fn current(
    State(state): State<AppState>,
    Query(params): Query<CurrentParams>,
) -> Result<Json<Value>, ApiError> {
    let Some(location) = present(params.location.as_ref()) else {
        return Err(ApiError::bad_request("Location parameter is required"));
    };

    let body = state
        .weather
        .current(location)
        .await
        .map_err(|e| ApiError::weather(&e))?;
    Ok(Json(body))
}
