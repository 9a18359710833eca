//! Caller-owned indicator settings and chart overlay preparation.
//!
//! Visibility of each moving-average overlay lives in [`IndicatorSettings`],
//! which the caller owns and passes in explicitly. Nothing here keeps state
//! between calls.

use std::ops::Range;

use serde::{Deserialize, Serialize};
use stocksim_core::types::Bar;

use crate::momentum::{macd, rsi, MacdOutput};
use crate::moving_average::sma;

/// One SMA line drawn over the price series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmaOverlay {
    pub period: usize,
    pub visible: bool,
}

/// MACD period triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdPeriods {
    pub short: usize,
    pub long: usize,
    pub signal: usize,
}

impl Default for MacdPeriods {
    fn default() -> Self {
        Self {
            short: 12,
            long: 26,
            signal: 9,
        }
    }
}

/// Which indicators to compute and which overlays to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorSettings {
    pub sma: Vec<SmaOverlay>,
    pub rsi_period: usize,
    pub macd: MacdPeriods,
}

impl Default for IndicatorSettings {
    fn default() -> Self {
        Self {
            sma: vec![
                SmaOverlay {
                    period: 20,
                    visible: false,
                },
                SmaOverlay {
                    period: 50,
                    visible: true,
                },
            ],
            rsi_period: 14,
            macd: MacdPeriods::default(),
        }
    }
}

impl IndicatorSettings {
    /// Flip visibility of the overlay with `period`.
    ///
    /// Returns the new visibility, or `None` if no such overlay is configured.
    pub fn toggle(&mut self, period: usize) -> Option<bool> {
        let overlay = self.sma.iter_mut().find(|o| o.period == period)?;
        overlay.visible = !overlay.visible;
        Some(overlay.visible)
    }

    /// Periods of the overlays currently shown, in configured order.
    pub fn visible_periods(&self) -> Vec<usize> {
        self.sma
            .iter()
            .filter(|o| o.visible)
            .map(|o| o.period)
            .collect()
    }
}

/// A bar together with the visible SMA values at that bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub bar: Bar,
    /// `(period, value)` for each visible overlay; `None` during warm-up
    pub sma: Vec<(usize, Option<f64>)>,
}

/// Attach visible SMA overlays to every bar.
pub fn chart_points(bars: &[Bar], settings: &IndicatorSettings) -> Vec<ChartPoint> {
    let lines: Vec<(usize, Vec<Option<f64>>)> = settings
        .visible_periods()
        .into_iter()
        .map(|period| (period, sma(bars, period)))
        .collect();

    bars.iter()
        .enumerate()
        .map(|(i, bar)| ChartPoint {
            bar: *bar,
            sma: lines.iter().map(|(period, line)| (*period, line[i])).collect(),
        })
        .collect()
}

/// Latest oscillator readings for a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorSummary {
    pub rsi: Option<f64>,
    pub macd: Option<MacdOutput>,
}

impl IndicatorSummary {
    pub fn compute(bars: &[Bar], settings: &IndicatorSettings) -> Self {
        let periods = settings.macd;
        Self {
            rsi: rsi(bars, settings.rsi_period),
            macd: macd(bars, periods.short, periods.long, periods.signal),
        }
    }
}

/// Trailing window of a series to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartRange {
    /// Last 30 bars
    #[serde(rename = "1m")]
    Month,
    /// Last 90 bars
    #[serde(rename = "3m")]
    Quarter,
    #[default]
    #[serde(rename = "all")]
    All,
}

impl ChartRange {
    /// Index range of the bars shown for a series of `len` bars.
    pub fn window(&self, len: usize) -> Range<usize> {
        let span = match self {
            ChartRange::Month => 30,
            ChartRange::Quarter => 90,
            ChartRange::All => len,
        };
        len.saturating_sub(span)..len
    }
}

impl std::str::FromStr for ChartRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" | "month" => Ok(ChartRange::Month),
            "3m" | "quarter" => Ok(ChartRange::Quarter),
            "all" => Ok(ChartRange::All),
            _ => Err(format!("Unknown chart range: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn rising(n: usize) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| {
                let c = 100.0 + i as f64;
                Bar::new(start + Days::new(i as u64), c, c + 1.0, c - 1.0, c, 500)
            })
            .collect()
    }

    #[test]
    fn test_default_settings_show_sma50_only() {
        let settings = IndicatorSettings::default();
        assert_eq!(settings.visible_periods(), vec![50]);
    }

    #[test]
    fn test_toggle_is_local_to_settings() {
        let mut mine = IndicatorSettings::default();
        let other = IndicatorSettings::default();

        assert_eq!(mine.toggle(20), Some(true));
        assert_eq!(mine.visible_periods(), vec![20, 50]);
        assert_eq!(other.visible_periods(), vec![50]);
        assert_eq!(mine.toggle(7), None);
    }

    #[test]
    fn test_chart_points_carry_visible_overlays() {
        let bars = rising(60);
        let mut settings = IndicatorSettings::default();
        settings.toggle(20);

        let points = chart_points(&bars, &settings);
        assert_eq!(points.len(), 60);
        assert_eq!(points[0].sma, vec![(20, None), (50, None)]);
        assert_eq!(points[19].sma[0].0, 20);
        assert!((points[19].sma[0].1.unwrap() - 109.5).abs() < 1e-10);
        assert!(points[19].sma[1].1.is_none());
        assert!((points[59].sma[1].1.unwrap() - 134.5).abs() < 1e-10);
    }

    #[test]
    fn test_summary_short_series_is_absent() {
        let summary = IndicatorSummary::compute(&rising(10), &IndicatorSettings::default());
        assert!(summary.rsi.is_none());
        assert!(summary.macd.is_none());

        let summary = IndicatorSummary::compute(&rising(40), &IndicatorSettings::default());
        assert_eq!(summary.rsi, Some(100.0));
        assert!(summary.macd.is_some());
    }

    #[test]
    fn test_chart_range_window() {
        assert_eq!(ChartRange::Month.window(90), 60..90);
        assert_eq!(ChartRange::Quarter.window(90), 0..90);
        assert_eq!(ChartRange::Month.window(12), 0..12);
        assert_eq!(ChartRange::All.window(5), 0..5);
        assert_eq!("3M".parse::<ChartRange>(), Ok(ChartRange::Quarter));
        assert!("5y".parse::<ChartRange>().is_err());
    }
}
