use wayfarer_config::AppConfig;

/// Emit warnings for providers left unconfigured, including likely mistyped env keys.
pub fn warn_unconfigured(config: &AppConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &AppConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.weather.is_configured() {
        if has_env_prefix(&env_keys, "WAYFARER_WEATHER") {
            warnings.push(
                "Weather config appears default while WAYFARER_WEATHER* env vars exist. Use double underscores (example: WAYFARER_WEATHER__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "Weather service not configured; set VISUAL_CROSSING_API_KEY to enable forecasts."
                    .to_string(),
            );
        }
    }

    if !config.ai.is_configured() {
        if has_env_prefix(&env_keys, "WAYFARER_AI") {
            warnings.push(
                "AI config appears default while WAYFARER_AI* env vars exist. Use double underscores (example: WAYFARER_AI__API_KEY)."
                    .to_string(),
            );
        } else {
            warnings.push(
                "AI service not configured; set OPENAI_API_KEY to enable recommendations. Fallback suggestions will be served."
                    .to_string(),
            );
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
