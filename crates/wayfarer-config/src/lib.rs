//! # wayfarer-config
//!
//! Layered configuration loading for Wayfarer using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WAYFARER_*` prefix, `__` as separator)
//! 2. Conventional unprefixed variables (`VISUAL_CROSSING_API_KEY`, `OPENAI_API_KEY`,
//!    `FRONTEND_URL`, `PORT`, `NODE_ENV`)
//! 3. Project-level `.wayfarer/config.toml`
//! 4. User-level `~/.config/wayfarer/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WAYFARER_WEATHER__API_KEY` -> `weather.api_key`,
//! `WAYFARER_AI__MODEL` -> `ai.model`, etc. The `__` (double underscore)
//! separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use wayfarer_config::AppConfig;
//!
//! let config = AppConfig::load().expect("config");
//!
//! if config.weather.is_configured() {
//!     println!("Weather provider: {}", config.weather.base_url);
//! }
//! ```

mod ai;
mod error;
mod general;
mod server;
mod weather;

pub use ai::{AiConfig, DEFAULT_AI_BASE_URL};
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use server::ServerConfig;
pub use weather::{DEFAULT_WEATHER_BASE_URL, WeatherConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unprefixed environment variables and the config keys they feed.
pub const LEGACY_ENV_KEYS: &[(&str, &str)] = &[
    ("VISUAL_CROSSING_API_KEY", "weather.api_key"),
    ("OPENAI_API_KEY", "ai.api_key"),
    ("FRONTEND_URL", "server.frontend_url"),
    ("PORT", "server.port"),
    ("NODE_ENV", "general.environment"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AppConfig {
    /// Merge defaults, TOML files, and the environment, then validate.
    ///
    /// A `.env` file is not read here; load it into the process environment
    /// first if one should apply.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on extraction failure or invalid values.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Provider chain, lowest priority first. Exposed for tests that layer
    /// extra providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // ~/.config/wayfarer/config.toml
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // ./.wayfarer/config.toml
        let local_path = PathBuf::from(".wayfarer/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Unprefixed variables from the deployment environment
        for &(var, key) in LEGACY_ENV_KEYS {
            figment = figment.merge(Env::raw().only(&[var]).map(move |_| key.into()));
        }

        // WAYFARER_* wins over everything
        figment = figment.merge(Env::prefixed("WAYFARER_").split("__"));

        figment
    }

    /// Reject values that would make the server unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.timeout_secs == 0 {
            return Err(invalid("weather.timeout_secs", "must be greater than zero"));
        }
        if self.ai.timeout_secs == 0 {
            return Err(invalid("ai.timeout_secs", "must be greater than zero"));
        }
        if !(0.0..=2.0).contains(&self.ai.temperature) {
            return Err(invalid("ai.temperature", "must be between 0.0 and 2.0"));
        }
        if self.ai.max_tokens == 0 {
            return Err(invalid("ai.max_tokens", "must be greater than zero"));
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("wayfarer").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_leave_providers_unconfigured() {
        let config = AppConfig::default();
        assert!(!config.weather.is_configured());
        assert!(!config.ai.is_configured());
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.general.environment, "development");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_environment_extracts_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config = AppConfig::from_figment(&AppConfig::figment()).expect("defaults");
            assert!(!config.weather.is_configured());
            assert_eq!(config.ai.max_tokens, 1000);
            Ok(())
        });
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut config = AppConfig::default();
        config.weather.timeout_secs = 0;
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "weather.timeout_secs"));
    }

    #[test]
    fn out_of_range_temperature_is_rejected() {
        let mut config = AppConfig::default();
        config.ai.temperature = 3.5;
        assert!(config.validate().is_err());
    }
}
