//! JSON envelopes returned by the HTTP surface.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::RecommendationResult;
use crate::enums::ServiceStatus;

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub environment: String,
    pub services: ServiceHealth,
}

/// Credential state of each upstream provider.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ServiceHealth {
    pub weather: ServiceStatus,
    pub ai: ServiceStatus,
}

/// Response from the AI recommendation and destination exploration routes.
///
/// `success` is false when the static fallback stood in for the AI answer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RecommendationEnvelope {
    pub success: bool,
    pub data: RecommendationResult,
    pub timestamp: DateTime<Utc>,
}

/// Response from `DELETE /api/{clients,itineraries}/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub message: String,
    pub id: String,
}
