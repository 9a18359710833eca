//! Synthetic daily series generation.
//!
//! A series is driven by two independent sources:
//! - a [`TrendModel`] built from the symbol seed (drift, two cycles and the
//!   per-day volatility), identical on every run for the same symbol;
//! - a caller-supplied [`NoiseSource`] for open jitter, candle body noise,
//!   wicks, volume and rare shock events, which is not reproducible unless the
//!   caller makes it so.

use std::f64::consts::PI;

use chrono::{Days, Local, NaiveDate};
use stocksim_core::error::GeneratorError;
use stocksim_core::traits::NoiseSource;
use stocksim_core::types::{round_cents, Bar, Series, SymbolProfile, MIN_PRICE};
use tracing::{debug, warn};

use crate::profiles::{known_profile, resolve_profile};
use crate::seed::{draw, symbol_seed};

/// Number of daily bars in a generated series.
pub const SERIES_LENGTH: usize = 90;

/// Chance per bar of a shock event.
pub const SHOCK_PROBABILITY: f64 = 0.015;

/// Full width of a shock; the applied move is uniform in `±SHOCK_MAGNITUDE / 2`.
pub const SHOCK_MAGNITUDE: f64 = 0.15;

const OPEN_JITTER: f64 = 0.005;
const WICK_FACTOR: f64 = 0.6;
const MOMENTUM_DECAY: f64 = 0.8;
const MOMENTUM_BLEND: f64 = 0.2;
const MOMENTUM_WEIGHT: f64 = 0.1;

/// Trim and upper-case an identifier, rejecting empty input.
pub fn normalize_symbol(identifier: &str) -> Result<String, GeneratorError> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        warn!("rejected empty symbol identifier");
        return Err(GeneratorError::InvalidInput(
            "symbol identifier must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_uppercase())
}

/// Sinusoidal component of the daily trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cycle {
    /// Length of one cycle in days
    pub period: f64,
    /// Peak contribution to the daily trend
    pub amplitude: f64,
}

impl Cycle {
    #[inline]
    pub fn at(&self, day: usize) -> f64 {
        (day as f64 * 2.0 * PI / self.period).sin() * self.amplitude
    }
}

/// Seed-derived, reproducible structure of a symbol's price path.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendModel {
    seed: i32,
    base_volatility: f64,
    /// Constant daily drift
    pub drift: f64,
    /// Long cycle (20 to 60 days) and short cycle (10 to 30 days)
    pub cycles: [Cycle; 2],
}

impl TrendModel {
    pub fn new(seed: i32, profile: &SymbolProfile) -> Self {
        Self {
            seed,
            base_volatility: profile.volatility,
            drift: (draw(seed, 1) - 0.5) * 0.005,
            cycles: [
                Cycle {
                    period: draw(seed, 2) * 40.0 + 20.0,
                    amplitude: draw(seed, 3) * 0.01,
                },
                Cycle {
                    period: draw(seed, 4) * 20.0 + 10.0,
                    amplitude: draw(seed, 5) * 0.005,
                },
            ],
        }
    }

    /// Drift plus both cycles for `day`, before momentum and shocks.
    pub fn structural_trend(&self, day: usize) -> f64 {
        self.cycles
            .iter()
            .fold(self.drift, |trend, cycle| trend + cycle.at(day))
    }

    /// Base volatility jittered by ±25% with a seeded draw.
    pub fn volatility(&self, day: usize) -> f64 {
        self.base_volatility * (1.0 + (draw(self.seed, day as i64) - 0.5) * 0.5)
    }
}

/// Running state carried from one bar to the next.
#[derive(Debug, Clone, Copy)]
struct PathState {
    last_close: f64,
    momentum: f64,
}

/// Generate a series ending today, using thread-local randomness for noise.
pub fn generate_series(identifier: &str) -> Result<Series, GeneratorError> {
    let today = Local::now().date_naive();
    generate_series_with(identifier, today, &mut rand::rng())
}

/// Generate [`SERIES_LENGTH`] daily bars ending on `end` (inclusive).
///
/// With the same identifier and an identically seeded `noise`, the output is
/// bit-for-bit identical.
pub fn generate_series_with<N: NoiseSource + ?Sized>(
    identifier: &str,
    end: NaiveDate,
    noise: &mut N,
) -> Result<Series, GeneratorError> {
    let symbol = normalize_symbol(identifier)?;
    let seed = symbol_seed(&symbol);
    let profile = resolve_profile(&symbol, seed);
    let model = TrendModel::new(seed, &profile);

    let start = end
        .checked_sub_days(Days::new(SERIES_LENGTH as u64 - 1))
        .ok_or_else(|| GeneratorError::InvalidInput(format!("end date {end} is out of range")))?;

    debug!(
        symbol = %symbol,
        seed,
        known = known_profile(&symbol).is_some(),
        base_price = profile.base_price,
        volatility = profile.volatility,
        "generating series"
    );

    let mut state = PathState {
        last_close: profile.base_price,
        momentum: 0.0,
    };
    let mut bars = Vec::with_capacity(SERIES_LENGTH);
    for (day, date) in start.iter_days().take(SERIES_LENGTH).enumerate() {
        bars.push(synthesize_bar(&symbol, &model, &profile, &mut state, day, date, noise));
    }

    Series::from_bars(symbol, bars).map_err(|e| GeneratorError::InvalidInput(e.to_string()))
}

fn synthesize_bar<N: NoiseSource + ?Sized>(
    symbol: &str,
    model: &TrendModel,
    profile: &SymbolProfile,
    state: &mut PathState,
    day: usize,
    date: NaiveDate,
    noise: &mut N,
) -> Bar {
    let mut daily_trend = model.structural_trend(day) + state.momentum * MOMENTUM_WEIGHT;
    let volatility = model.volatility(day);

    if noise.unit() < SHOCK_PROBABILITY {
        let shock = (noise.unit() - 0.5) * SHOCK_MAGNITUDE;
        debug!(symbol, day, shock, "shock event");
        daily_trend += shock;
    }

    let open = state.last_close * (1.0 + (noise.unit() - 0.5) * OPEN_JITTER);
    let body_noise = (noise.unit() - 0.5) * 2.0;
    let change = daily_trend * open + body_noise * volatility * open;
    let close = open + change;
    let high = open.max(close) + noise.unit() * volatility * open * WICK_FACTOR;
    let low = open.min(close) - noise.unit() * volatility * open * WICK_FACTOR;
    let volume = (profile.base_volume as f64
        * (0.75 + noise.unit() * 0.5)
        * (1.0 + daily_trend.abs() * 10.0))
        .floor() as u64;

    let open = round_cents(open).max(MIN_PRICE);
    let close = round_cents(close).max(MIN_PRICE);
    let high = round_cents(high).max(open).max(close);
    let low = round_cents(low).max(MIN_PRICE).min(open).min(close);

    let realized = (close - state.last_close) / state.last_close;
    state.momentum = state.momentum * MOMENTUM_DECAY + realized * MOMENTUM_BLEND;
    state.last_close = close;

    Bar::new(date, open, high, low, close, volume)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use stocksim_indicators::sma;

    /// Noise source returning the same draw forever.
    struct Constant(f64);

    impl NoiseSource for Constant {
        fn unit(&mut self) -> f64 {
            self.0
        }
    }

    fn end_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
    }

    #[test]
    fn test_series_length_and_dates() {
        let mut rng = StdRng::seed_from_u64(1);
        let series = generate_series_with("RELIANCE", end_date(), &mut rng).unwrap();

        assert_eq!(series.len(), SERIES_LENGTH);
        assert_eq!(series.last().unwrap().date, end_date());
        assert_eq!(
            series.get(0).unwrap().date,
            NaiveDate::from_ymd_opt(2024, 4, 2).unwrap()
        );
        assert!(series.bars().windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_bars_are_well_formed() {
        let symbols = ["TESTCO", "YESBANK", "MARUTI", "ZOMATO", "Q", "L&T", "ÄKTIE"];
        for (i, symbol) in symbols.iter().enumerate() {
            for run in 0..5 {
                let mut rng = StdRng::seed_from_u64((i * 100 + run) as u64);
                let series = generate_series_with(symbol, end_date(), &mut rng).unwrap();
                for bar in series.iter() {
                    assert!(bar.is_well_formed(), "{symbol}: {bar:?}");
                    assert!(bar.low <= bar.open && bar.open <= bar.high);
                    assert!(bar.low <= bar.close && bar.close <= bar.high);
                    assert_eq!(bar.close, round_cents(bar.close));
                }
            }
        }
    }

    #[test]
    fn test_extreme_noise_keeps_prices_positive() {
        // 0.0 triggers a -7.5% shock on every bar and drives the price to the floor
        for draw in [0.0, 0.999_999] {
            let series = generate_series_with("YESBANK", end_date(), &mut Constant(draw)).unwrap();
            assert_eq!(series.len(), SERIES_LENGTH);
            assert!(series.iter().all(|b| b.is_well_formed()), "draw {draw}");
        }
        let crashed = generate_series_with("YESBANK", end_date(), &mut Constant(0.0)).unwrap();
        assert_eq!(crashed.last().unwrap().close, MIN_PRICE);
    }

    #[test]
    fn test_identical_noise_gives_identical_series() {
        let a = generate_series_with("INFY", end_date(), &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_series_with("INFY", end_date(), &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);

        let c = generate_series_with("INFY", end_date(), &mut StdRng::seed_from_u64(43)).unwrap();
        assert_ne!(a.bars(), c.bars());
    }

    #[test]
    fn test_trend_structure_depends_only_on_symbol() {
        let seed = symbol_seed("TESTCO");
        let profile = resolve_profile("TESTCO", seed);
        let a = TrendModel::new(seed, &profile);
        let b = TrendModel::new(symbol_seed("TESTCO"), &resolve_profile("TESTCO", seed));

        assert_eq!(a, b);
        for day in 0..SERIES_LENGTH {
            assert_eq!(a.structural_trend(day), b.structural_trend(day));
            assert_eq!(a.volatility(day), b.volatility(day));
        }

        assert!(a.drift.abs() <= 0.0025);
        assert!((20.0..=60.0).contains(&a.cycles[0].period));
        assert!((10.0..=30.0).contains(&a.cycles[1].period));
        for day in 0..SERIES_LENGTH {
            let vol = a.volatility(day);
            assert!(vol >= profile.volatility * 0.75 && vol <= profile.volatility * 1.25);
        }
    }

    #[test]
    fn test_symbol_is_normalised() {
        let upper = generate_series_with("TESTCO", end_date(), &mut Constant(0.5)).unwrap();
        let lower = generate_series_with("  testco ", end_date(), &mut Constant(0.5)).unwrap();
        assert_eq!(upper.symbol, "TESTCO");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_empty_identifier_is_invalid_input() {
        for input in ["", "   ", "\t\n"] {
            let err = generate_series_with(input, end_date(), &mut Constant(0.5)).unwrap_err();
            assert!(matches!(err, GeneratorError::InvalidInput(_)));
        }
    }

    #[test]
    fn test_testco_with_neutral_noise() {
        // A constant 0.5 draw disables shocks, open jitter and body noise,
        // leaving only the seeded trend path.
        let series = generate_series_with("TESTCO", end_date(), &mut Constant(0.5)).unwrap();
        let closes = series.closes();

        assert_eq!(series.len(), 90);
        assert_eq!(&closes[..5], &[179.71, 179.58, 179.6, 179.77, 180.07]);
        assert_eq!(closes[19], 181.01);

        let sma20 = sma(series.bars(), 20);
        assert_eq!(sma20.len(), 90);
        assert!(sma20[..19].iter().all(Option::is_none));
        let expected = closes[..20].iter().sum::<f64>() / 20.0;
        assert!((sma20[19].unwrap() - expected).abs() < 1e-9);
        assert!((sma20[19].unwrap() - 181.8015).abs() < 1e-6);
    }

    #[test]
    fn test_generate_series_defaults() {
        let before = Local::now().date_naive();
        let series = generate_series("tcs").unwrap();
        assert_eq!(series.symbol, "TCS");
        assert_eq!(series.len(), SERIES_LENGTH);

        // The clock may cross midnight between the two reads
        let last = series.last().unwrap().date;
        assert!(last == before || Some(last) == before.succ_opt(), "{last}");
        assert!(generate_series("").is_err());
    }
}
