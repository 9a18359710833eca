//! Logging, price alerts and series reports.

mod alert;
mod logging;
mod report;

pub use alert::PriceAlert;
pub use logging::setup_logging;
pub use report::{format_optional, SeriesReport};
