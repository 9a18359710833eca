//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stocksim_config::load_config;

pub async fn run(config_path: &Path) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            println!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Live interval: {} ms", config.live.interval_ms);
    match config.live.alert_price {
        Some(price) => println!("Alert price: {:.2}", price),
        None => println!("Alert price: none"),
    }
    println!("Visible SMA overlays: {:?}", config.indicators.visible_periods());
    println!();
    println!("Effective configuration:");
    println!("{}", config.to_toml()?);

    Ok(())
}
