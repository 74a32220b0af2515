use std::path::Path;

use anyhow::Context;
use wayfarer_config::AppConfig;

use crate::cli::Args;

/// Load `.env`, then layered configuration, then apply CLI overrides.
pub fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    load_dotenv(&cwd)?;

    let mut config = AppConfig::load().context("failed to load configuration")?;
    apply_overrides(&mut config, args);
    Ok(config)
}

fn load_dotenv(dir: &Path) -> anyhow::Result<()> {
    let env_path = dir.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded dotenv file");
    }
    Ok(())
}

fn apply_overrides(config: &mut AppConfig, args: &Args) {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(host: Option<&str>, port: Option<u16>) -> Args {
        Args {
            host: host.map(String::from),
            port,
            quiet: false,
            verbose: false,
        }
    }

    #[test]
    fn cli_overrides_replace_config_values() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args(Some("127.0.0.1"), Some(9000)));
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn absent_overrides_keep_config_values() {
        let mut config = AppConfig::default();
        apply_overrides(&mut config, &args(None, None));
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3001);
    }

    #[test]
    fn missing_dotenv_is_not_an_error() {
        let dir = std::env::temp_dir().join("wayfarer-no-dotenv-here");
        assert!(load_dotenv(&dir).is_ok());
    }
}
