//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deployment environment name, reported by the health endpoint.
    /// Also read from `NODE_ENV`.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
        }
    }
}

impl GeneralConfig {
    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.environment, "development");
        assert!(!config.is_production());
    }

    #[test]
    fn production_is_case_insensitive() {
        let config = GeneralConfig {
            environment: "Production".into(),
        };
        assert!(config.is_production());
    }
}
