//! Moving average indicators.

use stocksim_core::error::IndicatorError;
use stocksim_core::traits::Indicator;
use stocksim_core::types::Bar;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values. Output is aligned with
/// the input: the first `period - 1` entries are `None`.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "SMA period must be greater than 0".to_string(),
            ));
        }
        Ok(Self { period })
    }
}

impl Indicator for Sma {
    type Output = Option<f64>;

    fn calculate(&self, data: &[f64]) -> Vec<Option<f64>> {
        if data.len() < self.period {
            return vec![None; data.len()];
        }

        let mut result = Vec::with_capacity(data.len());
        result.resize(self.period - 1, None);
        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(Some(sum / period_f64));

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(Some(sum / period_f64));
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Seeded with the first value and defined from index 0, so the output has no
/// warm-up gap and the same length as the input.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "EMA period must be greater than 0".to_string(),
            ));
        }
        let multiplier = 2.0 / (period as f64 + 1.0);
        Ok(Self { period, multiplier })
    }

    /// Smoothing constant `2 / (period + 1)`.
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        let Some((&first, rest)) = data.split_first() else {
            return vec![];
        };

        let mut result = Vec::with_capacity(data.len());
        let one_minus_mult = 1.0 - self.multiplier;

        let mut ema = first;
        result.push(ema);
        for &price in rest {
            ema = price * self.multiplier + ema * one_minus_mult;
            result.push(ema);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

/// SMA of closing prices, one entry per bar.
///
/// Entries without a full window are `None`; a zero period yields all `None`.
pub fn sma(bars: &[Bar], period: usize) -> Vec<Option<f64>> {
    match Sma::new(period) {
        Ok(sma) => sma.calculate(&closes(bars)),
        Err(_) => vec![None; bars.len()],
    }
}

/// EMA over raw values, defined from the first element onward.
///
/// A zero period yields an empty vector.
pub fn ema(values: &[f64], period: usize) -> Vec<f64> {
    Ema::new(period)
        .map(|ema| ema.calculate(values))
        .unwrap_or_default()
}

pub(crate) fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn bars_from(closes: &[f64]) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::new(start + Days::new(i as u64), c, c, c, c, 100))
            .collect()
    }

    #[test]
    fn test_sma() {
        let sma = Sma::new(3).unwrap();
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 5);
        assert_eq!(&result[..2], &[None, None]);
        assert!((result[2].unwrap() - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[3].unwrap() - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[4].unwrap() - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5).unwrap();
        let result = sma.calculate(&[1.0, 2.0, 3.0]);

        assert_eq!(result, vec![None, None, None]);
    }

    #[test]
    fn test_sma_warm_up_over_bars() {
        let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let result = sma(&bars_from(&closes), 20);

        assert_eq!(result.len(), 30);
        assert_eq!(result.iter().take_while(|v| v.is_none()).count(), 19);
        let expected = closes[..20].iter().sum::<f64>() / 20.0;
        assert!((result[19].unwrap() - expected).abs() < 1e-10);
        assert!((result[29].unwrap() - 119.5).abs() < 1e-10);
    }

    #[test]
    fn test_sma_zero_period_is_absent() {
        assert!(Sma::new(0).is_err());
        assert_eq!(sma(&bars_from(&[1.0, 2.0]), 0), vec![None, None]);
    }

    #[test]
    fn test_ema_starts_at_first_value() {
        let ema = Ema::new(3).unwrap();
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema.calculate(&data);

        // mult = 2/(3+1) = 0.5
        assert_eq!(result.len(), 5);
        assert_eq!(result[0], 1.0);
        assert!((result[1] - 1.5).abs() < 1e-10);
        assert!((result[2] - 2.25).abs() < 1e-10);
        assert!((result[4] - 4.0625).abs() < 1e-10);
    }

    #[test]
    fn test_ema_empty_and_constant() {
        assert!(ema(&[], 5).is_empty());
        assert!(ema(&[1.0, 2.0], 0).is_empty());
        assert!(ema(&[7.0; 10], 4).iter().all(|&v| (v - 7.0).abs() < 1e-12));
    }
}
