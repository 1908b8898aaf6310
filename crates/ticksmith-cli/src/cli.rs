//! CLI argument definitions for ticksmith.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `quote` | Synthesize current quote(s) for symbols |
//! | `history` | Synthesize a daily price history |
//! | `predict` | Project prices forward from synthetic history |
//! | `tickers` | List the known ticker catalog |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//! | `--seed` | (random) | Seed the generators for reproducible output |
//!
//! # Examples
//!
//! ```bash
//! # Dashboard quote cards
//! ticksmith quote AAPL MSFT GOOGL AMZN --format table
//!
//! # 30 calendar days of synthetic history
//! ticksmith history NVDA --days 30 --pretty
//!
//! # A 7-day projection with CSV download and QR share link
//! ticksmith predict TSLA --days 7 --export --qr
//!
//! # Reproducible output for scripting
//! ticksmith quote AAPL --seed 42
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// 🦀 ticksmith - Synthetic stock dashboard data CLI
///
/// Generates mock quotes, random-walk price histories, and toy forecasts.
/// There is no data source and no model: every number is drawn locally,
/// which makes the output safe for demos and deterministic under `--seed`.
#[derive(Debug, Parser)]
#[command(
    name = "ticksmith",
    author,
    version,
    about = "Synthetic stock dashboard data CLI",
    long_about = "ticksmith generates mock market data for dashboard development:\n\
\n\
  • Current-quote snapshots with internally consistent fields\n\
  • Random-walk daily OHLCV history (weekends skipped)\n\
  • A toy trailing-window price projection with CSV export and QR share link\n\
\n\
All data is synthetic. Use 'ticksmith <command> --help' for command help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON envelope (default)
    /// - table: Human-readable terminal output
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Seed for the synthetic generators.
    ///
    /// With a seed, output is reproducible per symbol; without one, every
    /// invocation draws fresh values.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output.
    Table,
    /// Single JSON envelope.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 💰 Synthesize current quote(s) for one or more symbols.
    ///
    /// Quotes are fetched concurrently and joined, one snapshot per symbol,
    /// with price/change/open/high/low kept internally consistent.
    ///
    /// # Examples
    ///
    ///   ticksmith quote AAPL
    ///   ticksmith quote AAPL MSFT GOOGL --pretty
    Quote(QuoteArgs),

    /// 📊 Synthesize a daily OHLCV price history.
    ///
    /// Produces one bar per weekday across the requested calendar span,
    /// ending today.
    ///
    /// # Examples
    ///
    ///   ticksmith history AAPL
    ///   ticksmith history NVDA --days 90
    History(HistoryArgs),

    /// 🔮 Project prices forward from a synthetic history.
    ///
    /// Averages the day-over-day change across the trailing window and
    /// compounds it over the requested trading-day horizon. Optionally
    /// writes the `<TICKER>_prediction.csv` download and emits a QR share
    /// link.
    ///
    /// # Examples
    ///
    ///   ticksmith predict AAPL --days 7
    ///   ticksmith predict TSLA --days 14 --export --qr
    Predict(PredictArgs),

    /// 📋 List the known ticker catalog.
    Tickers,
}

/// Arguments for the `quote` command.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// One or more market symbols (e.g., AAPL, MSFT, GOOGL).
    #[arg(required = true, num_args = 1..)]
    pub symbols: Vec<String>,
}

/// Arguments for the `history` command.
#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Market symbol to generate history for.
    pub symbol: String,

    /// Calendar days of history, ending today (weekends produce no bars).
    #[arg(long, default_value_t = 30)]
    pub days: u32,
}

/// Arguments for the `predict` command.
#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Market symbol to project.
    pub symbol: String,

    /// Trading days to predict (1-30).
    #[arg(long, default_value_t = 7)]
    pub days: usize,

    /// Calendar days of synthetic history feeding the projection.
    #[arg(long, default_value_t = 30)]
    pub history_days: u32,

    /// Write the prediction CSV.
    ///
    /// With no value (or a directory), the file is named
    /// `<TICKER>_prediction.csv`; a file path is used as-is.
    #[arg(long, num_args = 0..=1, default_missing_value = ".")]
    pub export: Option<PathBuf>,

    /// Include the QR share payload and image URL in the output.
    #[arg(long, default_value_t = false)]
    pub qr: bool,
}
