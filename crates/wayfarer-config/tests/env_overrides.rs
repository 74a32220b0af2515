//! Environment variable precedence, using `figment::Jail` for sandboxed env changes.

use figment::Jail;
use wayfarer_config::AppConfig;

#[test]
fn conventional_variables_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("VISUAL_CROSSING_API_KEY", "vc-key");
        jail.set_env("OPENAI_API_KEY", "sk-openai");
        jail.set_env("FRONTEND_URL", "https://plan.example.com");
        jail.set_env("PORT", "8088");
        jail.set_env("NODE_ENV", "production");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.weather.api_key, "vc-key");
        assert_eq!(config.ai.api_key, "sk-openai");
        assert_eq!(config.server.frontend_url, "https://plan.example.com");
        assert_eq!(config.server.port, 8088);
        assert!(config.general.is_production());
        Ok(())
    });
}

#[test]
fn prefixed_variables_beat_conventional_ones() {
    Jail::expect_with(|jail| {
        jail.set_env("OPENAI_API_KEY", "sk-conventional");
        jail.set_env("WAYFARER_AI__API_KEY", "sk-prefixed");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.ai.api_key, "sk-prefixed");
        Ok(())
    });
}

#[test]
fn prefixed_variables_reach_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("WAYFARER_AI__MODEL", "gpt-4o-mini");
        jail.set_env("WAYFARER_WEATHER__TIMEOUT_SECS", "4");
        jail.set_env("WAYFARER_SERVER__HOST", "127.0.0.1");

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert_eq!(config.weather.timeout_secs, 4);
        assert_eq!(config.server.bind_addr(), "127.0.0.1:3001");
        Ok(())
    });
}

#[test]
fn unrelated_variables_are_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("API_KEY", "not-ours");
        jail.set_env("HOST", "example.invalid");

        let config = AppConfig::load().expect("config loads");
        assert!(!config.weather.is_configured());
        assert!(!config.ai.is_configured());
        assert_eq!(config.server.host, "0.0.0.0");
        Ok(())
    });
}

#[test]
fn invalid_env_value_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("WAYFARER_AI__TIMEOUT_SECS", "0");
        assert!(AppConfig::load().is_err());
        Ok(())
    });
}
