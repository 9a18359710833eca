//! Market simulator CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use stocksim_config::load_config_or_default;
use stocksim_monitor::setup_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config_or_default(&cli.config)
        .with_context(|| format!("Failed to load configuration from {:?}", cli.config))?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {:?}", cli.config))?;

    // Setup logging
    let log_level = cli
        .log_level
        .map(|level| level.as_str().to_string())
        .unwrap_or_else(|| config.logging.level.clone());
    let json = cli.json_logs || config.logging.is_json();
    let _log_guard = setup_logging(&log_level, json, config.logging.file.as_deref().map(Path::new));

    // Execute command
    match cli.command {
        Commands::Generate(args) => cli::commands::generate::run(args, &config).await,
        Commands::Indicators(args) => cli::commands::indicators::run(args, &config).await,
        Commands::Live(args) => cli::commands::live::run(args, &config).await,
        Commands::Profiles => cli::commands::profiles::run().await,
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config).await,
    }
}
