//! HTTP error responses.
//!
//! Every failure leaves the server as `(status, {"error": message})`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use wayfarer_core::errors::CoreError;
use wayfarer_upstream::UpstreamError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    RequestTimeout(String),

    #[error("{0}")]
    TooManyRequests(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            Self::TooManyRequests(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Map a weather provider failure onto the response the frontend expects.
    ///
    /// The provider's own body is never forwarded.
    #[must_use]
    pub fn weather(error: &UpstreamError) -> Self {
        tracing::warn!(code = error.code(), %error, "weather provider request failed");
        match error {
            UpstreamError::NotConfigured { .. } => {
                Self::Internal("Weather service not configured".into())
            }
            UpstreamError::Unauthorized => {
                Self::Internal("Weather service authentication failed".into())
            }
            UpstreamError::RateLimited { .. } => {
                Self::TooManyRequests("Too many requests. Please try again later.".into())
            }
            UpstreamError::BadRequest(_) => {
                Self::BadRequest("Invalid location or date parameters".into())
            }
            UpstreamError::Timeout => {
                Self::RequestTimeout("Weather service request timed out".into())
            }
            UpstreamError::Unavailable(_) => {
                Self::Unavailable("Weather service is unavailable".into())
            }
            UpstreamError::Http(_)
            | UpstreamError::Api { .. }
            | UpstreamError::Parse(_)
            | UpstreamError::EmptyResponse => Self::Internal("Weather service error".into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound { entity, .. } => Self::NotFound(format!("{entity} not found")),
            CoreError::Validation(message) => Self::BadRequest(message),
            CoreError::Other(error) => {
                tracing::error!(%error, "unexpected error");
                Self::Internal("Internal server error".into())
            }
        }
    }
}
