//! Error types for the market simulator.

use chrono::NaiveDate;
use thiserror::Error;

/// Top-level simulator error.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Series generator errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// The identifier was empty or otherwise unusable as a symbol.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Series and data source errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Bar dated {next} does not follow {previous}")]
    NonIncreasingDate { previous: NaiveDate, next: NaiveDate },

    #[error("Live update for {actual} cannot replace the bar for {expected}")]
    DateMismatch { expected: NaiveDate, actual: NaiveDate },

    #[error("Series is empty")]
    EmptySeries,

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("No data available: {0}")]
    NoData(String),
}

/// Indicator construction errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
