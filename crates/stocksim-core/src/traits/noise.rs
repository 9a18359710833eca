//! Unseeded noise used by bar synthesis and live ticks.
//!
//! Synthetic series mix two kinds of randomness. Trend structure comes from
//! draws keyed on the symbol seed and is reproducible. Intrabar noise (open
//! jitter, wicks, volume, shock events, live ticks) comes from a
//! [`NoiseSource`] and is not. Keeping the second behind a trait lets callers
//! plug in a seeded or constant source when they need exact OHLC values.

use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait NoiseSource {
    /// Next uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl NoiseSource for ThreadRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl NoiseSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}
