//! Live simulation command implementation.

use anyhow::{Context, Result};
use std::time::Duration;
use stocksim_config::AppConfig;
use stocksim_data::{generate_series, LiveFeed};
use stocksim_monitor::PriceAlert;
use tracing::{info, warn};

use crate::cli::LiveArgs;

pub async fn run(args: LiveArgs, config: &AppConfig) -> Result<()> {
    let mut series = generate_series(&args.symbol).context("Failed to generate series")?;
    let last = *series.last().context("Generated series is empty")?;

    let interval = args
        .interval_ms
        .map(Duration::from_millis)
        .unwrap_or_else(|| config.live.interval());
    let feed = LiveFeed::new(interval).context("Invalid live interval")?;

    let mut alert = args
        .alert
        .or(config.live.alert_price)
        .map(PriceAlert::new)
        .transpose()?;

    println!(
        "{} live from {} close {:.2} (every {} ms, Ctrl-C to stop)",
        series.symbol,
        last.date,
        last.close,
        interval.as_millis()
    );
    if let Some(alert) = &alert {
        println!("Alert armed at {:.2}", alert.target());
    }

    let mut handle = feed.start(series.symbol.clone(), last);
    let mut received = 0u64;

    loop {
        if args.ticks.is_some_and(|limit| received >= limit) {
            break;
        }

        let tick = tokio::select! {
            tick = handle.next() => match tick {
                Some(tick) => tick,
                None => break,
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                break;
            }
        };

        series.replace_last(tick.bar)?;
        received += 1;

        let bar = tick.bar;
        let change = bar.close - tick.previous.close;
        println!(
            "{:>5}  close {:>10.2} ({:+.2})  high {:>10.2}  low {:>10.2}  vol {:>12}",
            received, bar.close, change, bar.high, bar.low, bar.volume
        );

        if let Some(alert) = alert.as_mut() {
            if alert.observe(tick.previous.close, bar.close) {
                warn!(symbol = %tick.symbol, target = alert.target(), close = bar.close, "Price alert");
                println!("*** ALERT: {} crossed {:.2} (now {:.2}) ***", tick.symbol, alert.target(), bar.close);
            }
        }
    }

    handle.shutdown().await;
    info!(symbol = %series.symbol, ticks = received, "Live session ended");

    Ok(())
}
