//! Recommendation service: prompt, call, parse, degrade.

use wayfarer_core::entities::{RecommendationResult, WeatherContext};
use wayfarer_upstream::{ChatClient, UpstreamError};

use crate::fallback::static_fallback;
use crate::parse::parse_completion;
use crate::preferences::UserPreferences;
use crate::prompt::{build_prompt, system_prompt};

/// Runs the recommendation pipeline over a [`ChatClient`].
#[derive(Debug, Clone)]
pub struct Recommender {
    chat: ChatClient,
}

impl Recommender {
    #[must_use]
    pub const fn new(chat: ChatClient) -> Self {
        Self { chat }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.chat.is_configured()
    }

    /// Ask the model for recommendations and parse its answer.
    ///
    /// Parse problems never surface as errors; they are folded into the
    /// returned result.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] when no completion text could be obtained.
    pub async fn recommend(
        &self,
        context: &WeatherContext,
        preferences: UserPreferences,
    ) -> Result<RecommendationResult, UpstreamError> {
        let preferences = preferences.normalized();
        let exploration = preferences.exploration_type;
        let prompt = build_prompt(context, &preferences);
        tracing::info!(
            location = %context.location,
            days = context.days.len(),
            template = %exploration,
            "requesting AI recommendations"
        );

        let text = self.chat.complete(system_prompt(exploration), &prompt).await?;
        Ok(parse_completion(&text, context, exploration))
    }

    /// Like [`Self::recommend`], but a failed call becomes the static
    /// destination fallback with `success: false` and a readable error.
    pub async fn recommend_or_fallback(
        &self,
        context: &WeatherContext,
        preferences: UserPreferences,
    ) -> RecommendationResult {
        match self.recommend(context, preferences).await {
            Ok(result) => result,
            Err(error) => {
                tracing::warn!(
                    code = error.code(),
                    %error,
                    location = %context.location,
                    "AI recommendation failed, using fallback"
                );
                fallback_result(&context.location, &error)
            }
        }
    }

    /// Overview of a destination with no forecast attached.
    pub async fn explore(
        &self,
        destination: &str,
        time_of_year: Option<String>,
    ) -> RecommendationResult {
        let context = WeatherContext {
            location: destination.to_string(),
            days: Vec::new(),
        };
        self.recommend_or_fallback(&context, UserPreferences::overview(time_of_year))
            .await
    }
}

/// Static fallback result for a failed chat call.
#[must_use]
pub fn fallback_result(location: &str, error: &UpstreamError) -> RecommendationResult {
    RecommendationResult {
        success: false,
        recommendations: static_fallback(location),
        raw_response: None,
        error: Some(failure_message(error)),
    }
}

/// User-facing message for a failed chat call.
#[must_use]
pub fn failure_message(error: &UpstreamError) -> String {
    match error {
        UpstreamError::NotConfigured { .. } => "AI service not configured".to_string(),
        UpstreamError::RateLimited { .. } => {
            "AI service rate limit exceeded. Please try again later.".to_string()
        }
        UpstreamError::Unauthorized => "AI service authentication failed".to_string(),
        UpstreamError::EmptyResponse => "AI service returned an empty response".to_string(),
        UpstreamError::Timeout => "AI service request timed out".to_string(),
        UpstreamError::Unavailable(_) => "AI service is unavailable".to_string(),
        UpstreamError::Api { status, .. } => format!("AI service error ({status})"),
        UpstreamError::Http(_)
        | UpstreamError::BadRequest(_)
        | UpstreamError::Parse(_) => "AI service error".to_string(),
    }
}
