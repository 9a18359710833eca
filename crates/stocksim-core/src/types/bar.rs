//! OHLCV (Open, High, Low, Close, Volume) bar type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Smallest price a simulated bar may carry.
pub const MIN_PRICE: f64 = 0.01;

/// Round a price to two decimal places (half away from zero).
#[inline]
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One trading-period observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Calendar date of the period, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

impl Bar {
    /// Create a new bar.
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// Calculate the typical price (HLC average).
    #[inline]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Calculate the bar's range (high - low).
    #[inline]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Calculate the bar's body size (absolute difference between open and close).
    #[inline]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Check if the bar is bullish (close > open).
    #[inline]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Check if the bar is bearish (close < open).
    #[inline]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }

    /// Check the price envelope: `low <= min(open, close) <= max(open, close) <= high`
    /// with every price finite and the close strictly positive.
    pub fn is_well_formed(&self) -> bool {
        let prices = [self.open, self.high, self.low, self.close];
        prices.iter().all(|p| p.is_finite())
            && self.close > 0.0
            && self.low > 0.0
            && self.low <= self.open.min(self.close)
            && self.open.max(self.close) <= self.high
    }
}
