//! Core traits for the market simulator.

mod indicator;
mod noise;

pub use indicator::{Indicator, MultiOutputIndicator};
pub use noise::NoiseSource;
