//! Live simulation: intraday updates to the newest bar.
//!
//! A live tick never opens a new period. It rewrites the current bar's close,
//! widens its high/low and adds volume; callers apply it with
//! [`Series::replace_last`](stocksim_core::types::Series::replace_last).

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use stocksim_core::error::SimError;
use stocksim_core::traits::NoiseSource;
use stocksim_core::types::{round_cents, Bar, MIN_PRICE};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Maximum relative move of one live tick.
pub const TICK_VOLATILITY: f64 = 0.0005;

/// Upper bound (exclusive) of volume added per tick.
pub const TICK_VOLUME_STEP: f64 = 1000.0;

/// Default period between live ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1500);

/// Apply one live update to `last`, using thread-local randomness.
pub fn next_tick(last: &Bar) -> Bar {
    next_tick_with(last, &mut rand::rng())
}

/// Apply one live update to `last`.
///
/// Date and open are copied; close moves by at most ±[`TICK_VOLATILITY`];
/// high and low stretch to include the new close.
pub fn next_tick_with<N: NoiseSource + ?Sized>(last: &Bar, noise: &mut N) -> Bar {
    let raw_close = last.close * (1.0 + (noise.unit() - 0.5) * 2.0 * TICK_VOLATILITY);
    let close = round_cents(raw_close).max(MIN_PRICE);
    let added_volume = (noise.unit() * TICK_VOLUME_STEP).floor() as u64;

    Bar {
        high: round_cents(last.high.max(raw_close)).max(close),
        low: round_cents(last.low.min(raw_close)).min(close),
        close,
        volume: last.volume.saturating_add(added_volume),
        ..*last
    }
}

/// One live update emitted by a [`LiveFeed`].
#[derive(Debug, Clone, PartialEq)]
pub struct LiveTick {
    pub symbol: String,
    /// Bar before this update
    pub previous: Bar,
    /// Replacement for the series' last bar
    pub bar: Bar,
}

/// Periodic live-update driver.
#[derive(Debug, Clone)]
pub struct LiveFeed {
    interval: Duration,
    buffer: usize,
}

impl Default for LiveFeed {
    fn default() -> Self {
        Self {
            interval: DEFAULT_TICK_INTERVAL,
            buffer: 64,
        }
    }
}

impl LiveFeed {
    /// Create a feed ticking every `interval`, which must be non-zero.
    pub fn new(interval: Duration) -> Result<Self, SimError> {
        if interval.is_zero() {
            return Err(SimError::Validation(
                "Live tick interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            interval,
            ..Self::default()
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start ticking from `last_bar` with OS-seeded noise.
    pub fn start(&self, symbol: impl Into<String>, last_bar: Bar) -> LiveFeedHandle {
        self.start_with(symbol, last_bar, StdRng::from_os_rng())
    }

    /// Start ticking from `last_bar` with the given noise source.
    ///
    /// Must be called inside a tokio runtime. The first tick arrives one full
    /// interval after the call.
    pub fn start_with<N>(&self, symbol: impl Into<String>, last_bar: Bar, noise: N) -> LiveFeedHandle
    where
        N: NoiseSource + Send + 'static,
    {
        let symbol = symbol.into();
        let (tx, rx) = mpsc::channel(self.buffer);
        let (stop_tx, stop_rx) = oneshot::channel();

        info!(symbol = %symbol, interval_ms = self.interval.as_millis() as u64, "live feed started");
        let task = tokio::spawn(run_feed(symbol, last_bar, self.interval, noise, tx, stop_rx));

        LiveFeedHandle {
            updates: rx,
            stop: Some(stop_tx),
            task,
        }
    }
}

async fn run_feed<N: NoiseSource>(
    symbol: String,
    mut current: Bar,
    period: Duration,
    mut noise: N,
    tx: mpsc::Sender<LiveTick>,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut ticks = 0u64;

    loop {
        tokio::select! {
            biased;
            _ = &mut stop => break,
            _ = ticker.tick() => {
                let bar = next_tick_with(&current, &mut noise);
                let tick = LiveTick {
                    symbol: symbol.clone(),
                    previous: current,
                    bar,
                };
                current = bar;
                ticks += 1;
                debug!(symbol = %symbol, close = bar.close, "live tick");
                if tx.send(tick).await.is_err() {
                    break;
                }
            }
        }
    }

    info!(symbol = %symbol, ticks, "live feed stopped");
}

/// Receiving end of a running [`LiveFeed`].
///
/// Dropping the handle cancels the feed.
#[derive(Debug)]
pub struct LiveFeedHandle {
    updates: mpsc::Receiver<LiveTick>,
    stop: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl LiveFeedHandle {
    /// Wait for the next tick; `None` once the feed has stopped and drained.
    pub async fn next(&mut self) -> Option<LiveTick> {
        self.updates.recv().await
    }

    /// Stop scheduling further ticks.
    pub fn stop(&mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
    }

    /// Stop the feed and wait for its task to finish.
    pub async fn shutdown(mut self) {
        self.stop();
        self.updates.close();
        if let Err(e) = (&mut self.task).await {
            warn!(error = %e, "live feed task failed");
        }
    }
}
