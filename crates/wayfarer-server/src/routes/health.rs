use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use wayfarer_core::enums::ServiceStatus;
use wayfarer_core::responses::{HealthResponse, ServiceHealth};

use super::HEALTH_PATH;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(HEALTH_PATH, get(health))
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
        environment: state.config.general.environment.clone(),
        services: ServiceHealth {
            weather: ServiceStatus::from_configured(state.weather.is_configured()),
            ai: ServiceStatus::from_configured(state.recommender.is_configured()),
        },
    })
}
