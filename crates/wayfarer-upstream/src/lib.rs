//! # wayfarer-upstream
//!
//! HTTP clients for the third-party providers Wayfarer proxies:
//! - Visual Crossing timeline API (daily forecasts, current conditions)
//! - an OpenAI-compatible chat-completion API
//!
//! Both clients share status-code classification and a per-request timeout.
//! Failures surface as [`UpstreamError`] with transport problems already split
//! into timeouts and unreachable hosts.

pub mod chat;
pub mod weather;

mod error;
mod http;

pub use chat::{ChatClient, ChatMessage};
pub use error::UpstreamError;
pub use weather::WeatherClient;
