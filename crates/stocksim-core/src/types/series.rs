//! Ordered bar history for a single symbol.

use serde::Serialize;

use super::Bar;
use crate::error::DataError;

/// Time-ordered bars for one symbol, oldest first.
///
/// Dates are strictly increasing. The series grows only through [`Series::push`];
/// live updates rewrite the newest bar in place through [`Series::replace_last`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Symbol identifier
    pub symbol: String,
    bars: Vec<Bar>,
}

impl Series {
    /// Create a new empty series.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bars: Vec::new(),
        }
    }

    /// Build a series from bars that are already in date order.
    pub fn from_bars(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, DataError> {
        if let Some(pair) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(DataError::NonIncreasingDate {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    /// Append a bar for a later date.
    pub fn push(&mut self, bar: Bar) -> Result<(), DataError> {
        if let Some(last) = self.bars.last() {
            if bar.date <= last.date {
                return Err(DataError::NonIncreasingDate {
                    previous: last.date,
                    next: bar.date,
                });
            }
        }
        self.bars.push(bar);
        Ok(())
    }

    /// Replace the newest bar with an intraday update of the same period.
    ///
    /// Returns the bar that was replaced.
    pub fn replace_last(&mut self, bar: Bar) -> Result<Bar, DataError> {
        let last = self.bars.last_mut().ok_or(DataError::EmptySeries)?;
        if last.date != bar.date {
            return Err(DataError::DateMismatch {
                expected: last.date,
                actual: bar.date,
            });
        }
        Ok(std::mem::replace(last, bar))
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Get a bar by index (0 = oldest).
    pub fn get(&self, index: usize) -> Option<&Bar> {
        self.bars.get(index)
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &Bar> {
        self.bars.iter()
    }

    /// Consume the series, returning its bars.
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }
}

impl AsRef<[Bar]> for Series {
    fn as_ref(&self) -> &[Bar] {
        &self.bars
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(d: u32, close: f64) -> Bar {
        let date = NaiveDate::from_ymd_opt(2024, 3, d).unwrap();
        Bar::new(date, close, close + 1.0, close - 1.0, close, 1000)
    }

    #[test]
    fn test_push_requires_later_date() {
        let mut series = Series::new("TCS");
        series.push(bar(1, 100.0)).unwrap();
        series.push(bar(2, 101.0)).unwrap();

        let err = series.push(bar(2, 102.0)).unwrap_err();
        assert!(matches!(err, DataError::NonIncreasingDate { .. }));
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_from_bars_rejects_unordered() {
        assert!(Series::from_bars("X", vec![bar(1, 1.0), bar(3, 1.0), bar(2, 1.0)]).is_err());
        assert!(Series::from_bars("X", vec![bar(1, 1.0), bar(3, 1.0)]).is_ok());
        assert!(Series::from_bars("X", vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_replace_last_keeps_length() {
        let mut series = Series::from_bars("X", vec![bar(1, 100.0), bar(2, 101.0)]).unwrap();

        let old = series.replace_last(bar(2, 105.0)).unwrap();
        assert_eq!(old.close, 101.0);
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes(), vec![100.0, 105.0]);
    }

    #[test]
    fn test_replace_last_rejects_new_period() {
        let mut series = Series::from_bars("X", vec![bar(1, 100.0)]).unwrap();
        assert!(matches!(
            series.replace_last(bar(2, 100.0)),
            Err(DataError::DateMismatch { .. })
        ));

        let mut empty = Series::new("X");
        assert!(matches!(
            empty.replace_last(bar(1, 100.0)),
            Err(DataError::EmptySeries)
        ));
    }
}
