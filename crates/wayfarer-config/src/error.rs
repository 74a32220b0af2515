//! Errors raised while loading configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment variable could not be read into the config.
    #[error("failed to load configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A value parsed but is outside what the server can run with.
    #[error("config key '{field}' {reason}")]
    InvalidValue { field: String, reason: String },
}
