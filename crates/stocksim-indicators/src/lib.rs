//! Technical indicators over simulated price series.
//!
//! This crate provides:
//! - Moving averages (SMA with a warm-up gap, EMA defined from the first bar)
//! - Momentum indicators (RSI with Wilder smoothing, MACD)
//! - Caller-owned overlay settings for charting SMA lines
//!
//! Every function is pure. Insufficient history is reported as `None`,
//! never as an error.

pub mod momentum;
pub mod moving_average;
pub mod overlay;

pub use momentum::{macd, rsi, Macd, MacdOutput, Rsi};
pub use moving_average::{ema, sma, Ema, Sma};
pub use overlay::{
    chart_points, ChartPoint, ChartRange, IndicatorSettings, IndicatorSummary, MacdPeriods,
    SmaOverlay,
};
