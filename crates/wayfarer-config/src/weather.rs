//! Visual Crossing weather provider configuration.

use serde::{Deserialize, Serialize};

/// Timeline API root; location and dates are appended as path segments.
pub const DEFAULT_WEATHER_BASE_URL: &str =
    "https://weather.visualcrossing.com/VisualCrossingWebServices/rest/services/timeline";

fn default_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

fn default_unit_group() -> String {
    "us".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WeatherConfig {
    /// Provider API key. Also read from `VISUAL_CROSSING_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Provider unit system. Prompt text and activity advice assume `us`.
    #[serde(default = "default_unit_group")]
    pub unit_group: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            unit_group: default_unit_group(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherConfig {
    /// Check if an API key is present.
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = WeatherConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, DEFAULT_WEATHER_BASE_URL);
        assert_eq!(config.unit_group, "us");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn whitespace_key_is_not_configured() {
        let config = WeatherConfig {
            api_key: "   ".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }
}
