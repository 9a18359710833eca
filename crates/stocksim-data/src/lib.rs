//! Synthetic market data for the simulator.
//!
//! - [`generate_series`]: deterministic-structure daily history for a symbol
//! - [`next_tick`] and [`LiveFeed`]: live updates to the newest bar
//! - [`read_csv`] / [`write_csv`]: import and export of user price history

mod csv_source;
pub mod generator;
pub mod live;
pub mod profiles;
pub mod seed;

pub use csv_source::{load_csv, read_csv, write_csv};
pub use generator::{
    generate_series, generate_series_with, normalize_symbol, TrendModel, SERIES_LENGTH,
};
pub use live::{next_tick, next_tick_with, LiveFeed, LiveFeedHandle, LiveTick};
pub use profiles::{known_profile, resolve_profile, KNOWN_PROFILES};
pub use seed::symbol_seed;
