//! Upstream provider error types.

use thiserror::Error;

/// Errors that can occur when calling the weather or chat-completion provider.
///
/// Transport failures are classified on conversion from [`reqwest::Error`] so
/// callers can map timeouts and unreachable hosts without inspecting the
/// underlying error.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP transport error not covered by a more specific variant.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The request exceeded the client timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS resolution or connection establishment failed.
    #[error("provider unreachable: {0}")]
    Unavailable(String),

    /// The provider returned 401 Unauthorized.
    #[error("provider rejected the API key")]
    Unauthorized,

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The provider returned 400 Bad Request.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The provider returned some other non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// No API key is configured for the provider.
    #[error("{service} service not configured")]
    NotConfigured {
        /// Which provider is missing credentials.
        service: &'static str,
    },

    /// The chat completion came back without any text.
    #[error("provider returned an empty completion")]
    EmptyResponse,
}

impl UpstreamError {
    /// Stable machine-readable identifier for logs and response bodies.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Http(_) => "upstream_http_error",
            Self::Timeout => "upstream_timeout",
            Self::Unavailable(_) => "upstream_unavailable",
            Self::Unauthorized => "upstream_auth_failed",
            Self::RateLimited { .. } => "upstream_rate_limited",
            Self::BadRequest(_) => "upstream_bad_request",
            Self::Api { .. } => "upstream_api_error",
            Self::Parse(_) => "upstream_parse_error",
            Self::NotConfigured { .. } => "not_configured",
            Self::EmptyResponse => "empty_response",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Unavailable(error.to_string())
        } else if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Http(error)
        }
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}
