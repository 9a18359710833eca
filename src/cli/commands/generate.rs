//! Generate command implementation.

use anyhow::{Context, Result};
use chrono::Local;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io;
use stocksim_config::AppConfig;
use stocksim_data::{generate_series_with, write_csv};
use stocksim_monitor::SeriesReport;
use tracing::info;

use crate::cli::{GenerateArgs, OutputFormat};

pub async fn run(args: GenerateArgs, config: &AppConfig) -> Result<()> {
    let end = args.end_date.unwrap_or_else(|| Local::now().date_naive());

    let series = match args.seed {
        Some(seed) => generate_series_with(&args.symbol, end, &mut StdRng::seed_from_u64(seed)),
        None => generate_series_with(&args.symbol, end, &mut rand::rng()),
    }
    .context("Failed to generate series")?;

    info!(symbol = %series.symbol, bars = series.len(), %end, "Generated series");

    match args.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        OutputFormat::Csv => {
            write_csv(&series, io::stdout().lock())?;
        }
        OutputFormat::Text => {
            println!("{}", SeriesReport::new(&series, &config.indicators).summary());
            println!("{:<12}{:>12}{:>12}{:>12}{:>12}{:>14}", "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME");
            for bar in series.iter() {
                println!(
                    "{:<12}{:>12.2}{:>12.2}{:>12.2}{:>12.2}{:>14}",
                    bar.date.to_string(), bar.open, bar.high, bar.low, bar.close, bar.volume
                );
            }
        }
    }

    if let Some(save_path) = &args.save {
        let file = File::create(save_path)
            .with_context(|| format!("Failed to create {}", save_path.display()))?;
        write_csv(&series, file)?;
        info!("Series saved to {:?}", save_path);
    }

    Ok(())
}
