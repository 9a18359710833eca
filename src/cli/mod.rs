//! CLI definitions.

pub mod commands;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stocksim_indicators::ChartRange;

#[derive(Parser)]
#[command(name = "stocksim")]
#[command(author, version, about = "Synthetic market data and technical indicators")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (overrides the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a synthetic daily series
    Generate(GenerateArgs),
    /// Show SMA overlays, RSI and MACD for a series
    Indicators(IndicatorsArgs),
    /// Stream live updates to the newest bar
    Live(LiveArgs),
    /// List built-in symbol profiles
    Profiles,
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Ticker symbol
    pub symbol: String,

    /// Last date of the series (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub end_date: Option<NaiveDate>,

    /// Seed for the noise generator (structure is always seeded by symbol)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Save the series as CSV
    #[arg(long)]
    pub save: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct IndicatorsArgs {
    /// Ticker symbol
    pub symbol: String,

    /// Trailing window to display (1m, 3m, all)
    #[arg(short, long, default_value = "all")]
    pub range: ChartRange,

    /// Analyse a CSV file instead of a generated series
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Toggle the SMA overlay with this period; unknown periods are added (repeatable)
    #[arg(long = "toggle-sma")]
    pub toggle_sma: Vec<usize>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args)]
pub struct LiveArgs {
    /// Ticker symbol
    pub symbol: String,

    /// Stop after this many ticks (runs until Ctrl-C otherwise)
    #[arg(short = 'n', long)]
    pub ticks: Option<u64>,

    /// Milliseconds between ticks (overrides configuration)
    #[arg(long)]
    pub interval_ms: Option<u64>,

    /// Alert when the close crosses this price
    #[arg(long)]
    pub alert: Option<f64>,
}
