//! Indicator trait definitions.

/// Trait for technical indicators.
///
/// Indicators process price data and produce derived values. They never
/// mutate their input.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically closing prices, oldest first)
    ///
    /// # Returns
    /// A vector of indicator values
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the look-back period of the indicator.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Multi-output indicator (e.g., MACD).
///
/// Some indicators produce multiple related values per step.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Latest value, or `None` when the history is too short.
    fn latest(&self, data: &[f64]) -> Option<Self::Outputs> {
        self.calculate(data).pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PairSum;

    impl MultiOutputIndicator for PairSum {
        type Outputs = (f64, f64);

        fn calculate(&self, data: &[f64]) -> Vec<(f64, f64)> {
            data.windows(2).map(|w| (w[0] + w[1], w[1] - w[0])).collect()
        }

        fn period(&self) -> usize {
            2
        }

        fn name(&self) -> &str {
            "pair"
        }
    }

    #[test]
    fn test_latest_takes_last_output() {
        assert_eq!(PairSum.latest(&[1.0, 2.0, 4.0]), Some((6.0, 2.0)));
        assert_eq!(PairSum.latest(&[1.0]), None);
    }
}
