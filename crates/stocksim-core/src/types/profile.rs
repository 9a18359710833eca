//! Per-symbol generation parameters.

use serde::{Deserialize, Serialize};

/// Static parameters that shape a synthetic series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SymbolProfile {
    /// Starting price of the series
    pub base_price: f64,
    /// Daily volatility as a fraction of price (0.02 = 2%)
    pub volatility: f64,
    /// Typical daily traded volume
    pub base_volume: u64,
}

impl SymbolProfile {
    pub const fn new(base_price: f64, volatility: f64, base_volume: u64) -> Self {
        Self {
            base_price,
            volatility,
            base_volume,
        }
    }
}
