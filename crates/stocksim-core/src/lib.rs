//! Core types and traits for the market simulator.
//!
//! This crate provides the foundational building blocks including:
//! - Market data types (Bar, Series, SymbolProfile)
//! - Error types shared by the generator, indicators and data sources
//! - Core traits for indicators and noise sources

pub mod error;
pub mod traits;
pub mod types;

pub use error::{DataError, GeneratorError, IndicatorError, SimError, SimResult};
pub use traits::*;
pub use types::*;
