//! Core data types for the market simulator.

mod bar;
mod profile;
mod series;

pub use bar::{round_cents, Bar, MIN_PRICE};
pub use profile::SymbolProfile;
pub use series::Series;
