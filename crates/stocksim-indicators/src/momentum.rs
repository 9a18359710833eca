//! Momentum indicators.

use serde::{Deserialize, Serialize};
use stocksim_core::error::IndicatorError;
use stocksim_core::traits::{Indicator, MultiOutputIndicator};
use stocksim_core::types::Bar;

use crate::moving_average::{closes, Ema};

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "RSI period must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period })
    }

    /// Calculate using Wilder's smoothing method.
    fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
        if values.len() < period {
            return vec![];
        }

        let mut result = Vec::with_capacity(values.len() - period + 1);
        let period_f64 = period as f64;

        // Initial average
        let mut avg: f64 = values[..period].iter().sum::<f64>() / period_f64;
        result.push(avg);

        // Wilder's smoothing: avg = (prev_avg * (period-1) + value) / period
        for &value in &values[period..] {
            avg = (avg * (period_f64 - 1.0) + value) / period_f64;
            result.push(avg);
        }

        result
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Indicator for Rsi {
    type Output = f64;

    /// One value per close from index `period` onward.
    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.period {
            return vec![];
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = data
            .windows(2)
            .map(|w| {
                let change = w[1] - w[0];
                (change.max(0.0), (-change).max(0.0))
            })
            .unzip();

        let avg_gains = Self::wilder_smooth(&gains, self.period);
        let avg_losses = Self::wilder_smooth(&losses, self.period);

        avg_gains
            .iter()
            .zip(avg_losses.iter())
            .map(|(&gain, &loss)| {
                if loss == 0.0 {
                    100.0
                } else {
                    100.0 - (100.0 / (1.0 + gain / loss))
                }
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (short EMA - long EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD indicator.
///
/// Both EMAs start at the first close. The MACD line pairs
/// `short_ema[i + (long - short)]` with `long_ema[i]`, so it is
/// `long - short` entries shorter than the input.
#[derive(Debug, Clone)]
pub struct Macd {
    short_period: usize,
    long_period: usize,
    signal_period: usize,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self {
            short_period: 12,
            long_period: 26,
            signal_period: 9,
        }
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(short: usize, long: usize, signal: usize) -> Result<Self, IndicatorError> {
        if short == 0 || long == 0 || signal == 0 {
            return Err(IndicatorError::InvalidParameter(
                "MACD periods must be greater than 0".to_string(),
            ));
        }
        if short > long {
            return Err(IndicatorError::InvalidParameter(format!(
                "MACD short period ({short}) must not exceed long period ({long})"
            )));
        }
        Ok(Self {
            short_period: short,
            long_period: long,
            signal_period: signal,
        })
    }

    /// Index offset between the short and long EMA when forming the MACD line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.long_period - self.short_period
    }

    /// MACD line: `short_ema[i + offset] - long_ema[i]` for every `i` with
    /// `i + offset` inside the input.
    pub fn macd_line(&self, data: &[f64]) -> Vec<f64> {
        let short_ema = ema_of(data, self.short_period);
        let long_ema = ema_of(data, self.long_period);
        let offset = self.offset();

        long_ema
            .iter()
            .enumerate()
            .filter_map(|(i, slow)| short_ema.get(i + offset).map(|fast| fast - slow))
            .collect()
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    /// One output per MACD line entry, empty when history is insufficient.
    fn calculate(&self, data: &[f64]) -> Vec<MacdOutput> {
        if data.len() < self.long_period {
            return vec![];
        }

        let macd_line = self.macd_line(data);
        if macd_line.len() < self.signal_period {
            return vec![];
        }

        let signal_line = ema_of(&macd_line, self.signal_period);

        macd_line
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdOutput {
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.long_period
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

fn ema_of(data: &[f64], period: usize) -> Vec<f64> {
    match Ema::new(period) {
        Ok(ema) => ema.calculate(data),
        Err(_) => vec![],
    }
}

/// Latest RSI of the closing prices, or `None` when `bars.len() <= period`.
///
/// Returns exactly `100.0` when the smoothed average loss is zero.
pub fn rsi(bars: &[Bar], period: usize) -> Option<f64> {
    let rsi = Rsi::new(period).ok()?;
    rsi.calculate(&closes(bars)).last().copied()
}

/// Latest MACD triple of the closing prices.
///
/// `None` when `bars.len() < long`, when the MACD line is shorter than
/// `signal`, or when the periods are invalid.
pub fn macd(bars: &[Bar], short: usize, long: usize, signal: usize) -> Option<MacdOutput> {
    let macd = Macd::with_periods(short, long, signal).ok()?;
    macd.latest(&closes(bars))
}
