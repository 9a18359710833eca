//! Indicators command implementation.

use anyhow::{Context, Result};
use stocksim_config::AppConfig;
use stocksim_data::{generate_series, load_csv, normalize_symbol};
use stocksim_indicators::{chart_points, SmaOverlay};
use stocksim_monitor::{format_optional, SeriesReport};
use tracing::info;

use crate::cli::IndicatorsArgs;

pub async fn run(args: IndicatorsArgs, config: &AppConfig) -> Result<()> {
    let series = match &args.data {
        Some(path) => {
            let symbol = normalize_symbol(&args.symbol)?;
            load_csv(path, &symbol)
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => generate_series(&args.symbol).context("Failed to generate series")?,
    };
    info!(symbol = %series.symbol, bars = series.len(), "Computing indicators");

    let mut settings = config.indicators.clone();
    for period in args.toggle_sma {
        if settings.toggle(period).is_none() {
            settings.sma.push(SmaOverlay {
                period,
                visible: true,
            });
        }
    }

    let report = SeriesReport::new(&series, &settings);
    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    // Overlays are computed over the full history, then windowed for display
    let points = chart_points(series.bars(), &settings);
    let window = args.range.window(points.len());

    let mut header = format!("{:<12}{:>12}", "DATE", "CLOSE");
    for period in settings.visible_periods() {
        header.push_str(&format!("{:>12}", format!("SMA{period}")));
    }
    println!("{header}");

    for point in &points[window] {
        let mut line = format!("{:<12}{:>12.2}", point.bar.date.to_string(), point.bar.close);
        for (_, value) in &point.sma {
            line.push_str(&format!("{:>12}", format_optional(*value, 2)));
        }
        println!("{line}");
    }
    println!();
    println!("{}", report.summary());

    Ok(())
}
