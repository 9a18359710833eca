//! CLI command implementations.

pub mod generate;
pub mod indicators;
pub mod live;
pub mod profiles;
pub mod validate;
