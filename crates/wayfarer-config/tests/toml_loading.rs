//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var and file manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use wayfarer_config::AppConfig;

#[test]
fn loads_weather_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[weather]
api_key = "toml-weather-key"
base_url = "http://localhost:9000/timeline"
unit_group = "metric"
timeout_secs = 5
"#,
        )?;

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.weather.api_key, "toml-weather-key");
        assert_eq!(config.weather.base_url, "http://localhost:9000/timeline");
        assert_eq!(config.weather.unit_group, "metric");
        assert_eq!(config.weather.timeout_secs, 5);
        assert!(config.weather.is_configured());
        Ok(())
    });
}

#[test]
fn loads_ai_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[ai]
api_key = "sk-toml"
model = "gpt-4o-mini"
temperature = 0.2
max_tokens = 600
"#,
        )?;

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.ai.api_key, "sk-toml");
        assert_eq!(config.ai.model, "gpt-4o-mini");
        assert!((config.ai.temperature - 0.2).abs() < f32::EPSILON);
        assert_eq!(config.ai.max_tokens, 600);
        assert_eq!(config.ai.timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
port = 4000
"#,
        )?;

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.frontend_url, "http://localhost:3000");
        assert_eq!(config.general.environment, "development");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[ai]
model = "from-toml"
"#,
        )?;
        jail.set_env("WAYFARER_AI__MODEL", "from-env");

        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("WAYFARER_").split("__"))
            .extract()?;

        assert_eq!(config.ai.model, "from-env");
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".wayfarer")?;
        jail.create_file(
            ".wayfarer/config.toml",
            r#"
[general]
environment = "staging"

[weather]
api_key = "project-key"
"#,
        )?;

        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.general.environment, "staging");
        assert!(config.weather.is_configured());
        Ok(())
    });
}

#[test]
fn malformed_toml_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".wayfarer")?;
        jail.create_file(".wayfarer/config.toml", "[server\nport = ")?;
        assert!(AppConfig::load().is_err());
        Ok(())
    });
}
