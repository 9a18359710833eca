//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LiveSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Environment variable prefix, e.g. `STOCKSIM__LIVE__INTERVAL_MS=500`.
pub const ENV_PREFIX: &str = "STOCKSIM";

/// Load configuration from file and environment.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, true)
}

/// Like [`load_config`], but a missing file falls back to built-in defaults.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    build(path, false)
}

fn build(path: &Path, required: bool) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(required))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stocksim.toml");
        fs::write(
            &path,
            r#"
[live]
interval_ms = 250
alert_price = 1820.5

[indicators]
rsi_period = 7
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.live.interval_ms, 250);
        assert_eq!(config.live.alert_price, Some(1820.5));
        assert_eq!(config.indicators.rsi_period, 7);
        assert_eq!(config.indicators.visible_periods(), vec![50]);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_loaded_zero_interval_fails_validation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zero.toml");
        fs::write(&path, "[live]\ninterval_ms = 0\n").unwrap();

        // Loading succeeds; startup must still refuse the value
        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config.live.interval_ms, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(load_config(&path).is_err());

        let config = load_config_or_default(&path).unwrap();
        assert_eq!(config.live.interval_ms, 1500);
        assert_eq!(config.live.alert_price, None);
    }

    #[test]
    fn test_overlay_list_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlays.toml");
        fs::write(
            &path,
            r#"
[[indicators.sma]]
period = 10
visible = true

[[indicators.sma]]
period = 200
visible = false
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.indicators.visible_periods(), vec![10]);
        assert_eq!(config.indicators.sma.len(), 2);
    }
}
