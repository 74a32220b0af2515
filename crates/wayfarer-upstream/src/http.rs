//! HTTP plumbing shared by the provider clients: client construction and
//! status classification.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};

use crate::error::UpstreamError;

const USER_AGENT: &str = concat!("wayfarer/", env!("CARGO_PKG_VERSION"));

/// Seconds to back off when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Build a `reqwest::Client` with the wayfarer user agent and a per-request
/// timeout covering connect, send, and body.
///
/// # Errors
///
/// Returns [`UpstreamError::Http`] if the TLS backend fails to initialize.
pub fn build_client(timeout_secs: u64) -> Result<reqwest::Client, UpstreamError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(UpstreamError::Http)
}

/// Pass a successful response through; turn any other status into an error.
///
/// Bodies are read only for 400 and unclassified statuses, where they end up
/// in the error for logging.
pub async fn check_response(
    resp: reqwest::Response,
) -> Result<reqwest::Response, UpstreamError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let error = match status {
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        },
        StatusCode::UNAUTHORIZED => UpstreamError::Unauthorized,
        StatusCode::BAD_REQUEST => UpstreamError::BadRequest(body_text(resp).await),
        other => UpstreamError::Api {
            status: other.as_u16(),
            message: body_text(resp).await,
        },
    };
    Err(error)
}

async fn body_text(resp: reqwest::Response) -> String {
    resp.text().await.unwrap_or_default()
}

/// `Retry-After` in delta-seconds form. HTTP-date values are not parsed.
fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
