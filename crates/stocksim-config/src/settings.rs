//! Configuration structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use stocksim_core::error::SimError;
use stocksim_indicators::IndicatorSettings;

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub live: LiveSettings,
    #[serde(default)]
    pub indicators: IndicatorSettings,
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stocksim".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// Live simulation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSettings {
    /// Milliseconds between live ticks
    pub interval_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_price: Option<f64>,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            interval_ms: 1500,
            alert_price: None,
        }
    }
}

impl LiveSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl AppConfig {
    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), SimError> {
        if !matches!(self.logging.format.to_lowercase().as_str(), "pretty" | "json") {
            return Err(SimError::Config(format!(
                "logging.format must be 'pretty' or 'json', got '{}'",
                self.logging.format
            )));
        }

        if self.live.interval_ms == 0 {
            return Err(SimError::Config(
                "live.interval_ms must be greater than zero".to_string(),
            ));
        }

        if let Some(price) = self.live.alert_price {
            if !price.is_finite() || price <= 0.0 {
                return Err(SimError::Config(format!(
                    "live.alert_price must be positive, got {price}"
                )));
            }
        }

        let indicators = &self.indicators;
        if indicators.sma.iter().any(|o| o.period == 0) {
            return Err(SimError::Config(
                "indicators.sma periods must be greater than zero".to_string(),
            ));
        }

        if indicators.rsi_period == 0 {
            return Err(SimError::Config(
                "indicators.rsi_period must be greater than zero".to_string(),
            ));
        }

        let macd = indicators.macd;
        if macd.short == 0 || macd.long == 0 || macd.signal == 0 {
            return Err(SimError::Config(
                "indicators.macd periods must be greater than zero".to_string(),
            ));
        }
        if macd.short > macd.long {
            return Err(SimError::Config(format!(
                "indicators.macd short period ({}) must not exceed long period ({})",
                macd.short, macd.long
            )));
        }

        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, SimError> {
        toml::to_string_pretty(self).map_err(|e| SimError::Serialization(e.to_string()))
    }
}
