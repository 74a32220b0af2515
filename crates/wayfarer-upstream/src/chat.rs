//! Chat-completion API client.

use serde::{Deserialize, Serialize};
use wayfarer_config::AiConfig;

use crate::error::UpstreamError;
use crate::http::{build_client, check_response};

const SERVICE: &str = "ai";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn into_text(self) -> Result<String, UpstreamError> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(UpstreamError::EmptyResponse)
    }
}

/// HTTP client for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Model, temperature, and token limit are fixed per client; each call sends
/// one system and one user message and returns the first choice's text.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl ChatClient {
    /// Create a chat client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::Http`] if the underlying client fails to build.
    pub fn new(config: &AiConfig) -> Result<Self, UpstreamError> {
        Ok(Self {
            http: build_client(config.timeout_secs)?,
            api_key: config.api_key.trim().to_string(),
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Send a system + user prompt pair and return the completion text.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError::NotConfigured`] without a key,
    /// [`UpstreamError::RateLimited`] on 429, [`UpstreamError::Unauthorized`] on
    /// 401, [`UpstreamError::EmptyResponse`] when no text comes back, and
    /// transport or parse errors otherwise.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String, UpstreamError> {
        if !self.is_configured() {
            return Err(UpstreamError::NotConfigured { service: SERVICE });
        }

        let messages = [ChatMessage::system(system), ChatMessage::user(user)];
        let body = ChatRequest {
            model: &self.model,
            messages: &messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };
        tracing::debug!(
            model = %self.model,
            prompt_chars = user.len(),
            "requesting chat completion"
        );

        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let resp = check_response(resp).await?;
        let data: ChatResponse = resp.json().await?;
        let text = data.into_text()?;
        tracing::debug!(completion_chars = text.len(), "chat completion received");
        Ok(text)
    }
}
