//! Series report generation.

use chrono::NaiveDate;
use serde::Serialize;
use stocksim_core::types::Series;
use stocksim_indicators::{sma, IndicatorSettings, IndicatorSummary};

/// Snapshot of a series and its latest indicator readings.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub symbol: String,
    pub bars: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    pub first_close: Option<f64>,
    pub last_close: Option<f64>,
    /// Percent change from first to last close
    pub change_pct: Option<f64>,
    pub period_high: Option<f64>,
    pub period_low: Option<f64>,
    pub average_volume: Option<f64>,
    /// Latest value of each visible SMA overlay
    pub sma: Vec<(usize, Option<f64>)>,
    pub indicators: IndicatorSummary,
}

impl SeriesReport {
    pub fn new(series: &Series, settings: &IndicatorSettings) -> Self {
        let bars = series.bars();
        let first = bars.first();
        let last = bars.last();

        let change_pct = match (first, last) {
            (Some(f), Some(l)) if f.close > 0.0 => Some((l.close - f.close) / f.close * 100.0),
            _ => None,
        };

        let period_high = bars.iter().map(|b| b.high).reduce(f64::max);
        let period_low = bars.iter().map(|b| b.low).reduce(f64::min);
        let average_volume = (!bars.is_empty())
            .then(|| bars.iter().map(|b| b.volume as f64).sum::<f64>() / bars.len() as f64);

        let overlays = settings
            .visible_periods()
            .into_iter()
            .map(|period| (period, sma(bars, period).last().copied().flatten()))
            .collect();

        Self {
            symbol: series.symbol.clone(),
            bars: bars.len(),
            first_date: first.map(|b| b.date),
            last_date: last.map(|b| b.date),
            first_close: first.map(|b| b.close),
            last_close: last.map(|b| b.close),
            change_pct,
            period_high,
            period_low,
            average_volume,
            sma: overlays,
            indicators: IndicatorSummary::compute(bars, settings),
        }
    }

    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str(&format!("  {} SERIES REPORT\n", self.symbol));
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str("PRICE\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        let span = match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => format!("{first} .. {last}"),
            _ => "N/A".to_string(),
        };
        s.push_str(&format!("  Bars:                {}\n", self.bars));
        s.push_str(&format!("  Period:              {}\n", span));
        s.push_str(&format!(
            "  Last Close:          {}\n",
            format_optional(self.last_close, 2)
        ));
        s.push_str(&format!(
            "  Change:              {}%\n",
            format_optional(self.change_pct, 2)
        ));
        s.push_str(&format!(
            "  Period High:         {}\n",
            format_optional(self.period_high, 2)
        ));
        s.push_str(&format!(
            "  Period Low:          {}\n",
            format_optional(self.period_low, 2)
        ));
        s.push_str(&format!(
            "  Avg Volume:          {}\n",
            format_optional(self.average_volume, 0)
        ));
        s.push('\n');

        s.push_str("INDICATORS\n");
        s.push_str("───────────────────────────────────────────────────────────\n");
        for (period, value) in &self.sma {
            s.push_str(&format!(
                "  {:<21}{}\n",
                format!("SMA {}:", period),
                format_optional(*value, 2)
            ));
        }
        s.push_str(&format!(
            "  RSI:                 {}\n",
            format_optional(self.indicators.rsi, 2)
        ));
        let macd = self.indicators.macd;
        s.push_str(&format!(
            "  MACD:                {}\n",
            format_optional(macd.map(|m| m.macd), 4)
        ));
        s.push_str(&format!(
            "  MACD Signal:         {}\n",
            format_optional(macd.map(|m| m.signal), 4)
        ));
        s.push_str(&format!(
            "  MACD Histogram:      {}\n",
            format_optional(macd.map(|m| m.histogram), 4)
        ));
        s.push('\n');

        s.push_str("═══════════════════════════════════════════════════════════\n");

        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Format an optional reading, rendering absence as `N/A`.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format!("{:.*}", decimals, v),
        None => "N/A".to_string(),
    }
}
