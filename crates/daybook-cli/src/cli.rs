//! CLI argument definitions for daybook.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `trend` | Day-over-day change, direction and high/low marks |
//! | `dispersion` | Intra-day mean, variance and volatility flag |
//! | `sources` | List available sample sources |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, ndjson, table, handler) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--strict` | `false` | Treat warnings as errors |
//!
//! # Examples
//!
//! ```bash
//! # Trend records over thirty days of synthetic data
//! daybook trend --seed 7 --pretty
//!
//! # Dispersion records from the live history endpoint
//! FETCH_URL=https://api.coinranking.com/v1/public/coin/1/history/30d \
//!     daybook dispersion --source coinranking
//!
//! # Records from a local file, one per line
//! daybook --format ndjson trend --source file --input prices.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use daybook_core::adapters::{DEFAULT_FETCH_URL, DEFAULT_SYNTHETIC_POINTS, FETCH_URL_ENV};

/// Daily price summaries from hourly samples.
#[derive(Debug, Parser)]
#[command(
    name = "daybook",
    author,
    version,
    about = "Daily price summaries from hourly samples",
    long_about = "daybook walks an ordered series of hourly prices once and emits one \
summary record per day plus a trailing record for the last, partial day.\n\
\n\
  • trend: change since the day opened, direction, all-time high/low flags\n\
  • dispersion: intra-day mean, sample variance, volatility flag\n\
\n\
Use 'daybook <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single envelope object (default)
    /// - ndjson: One record per line
    /// - table: Human-readable summary
    /// - handler: {"statusCode": 200, "body": "<records as JSON>"}
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Treat warnings and errors as failures (exit code 5).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON envelope.
    Json,
    /// Newline-delimited records.
    Ndjson,
    /// Human-readable summary.
    Table,
    /// Status code plus JSON-encoded body.
    Handler,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// 📈 Trend records: change, direction, weekday, high/low since start.
    ///
    /// # Examples
    ///
    ///   daybook trend
    ///   daybook trend --source coinranking --pretty
    Trend(SummarizeArgs),

    /// 📊 Dispersion records: daily average, variance, volatility alert.
    ///
    /// # Examples
    ///
    ///   daybook dispersion --seed 42
    ///   daybook dispersion --source file --input prices.json
    Dispersion(SummarizeArgs),

    /// 🔌 List available sample sources.
    Sources(SourcesArgs),
}

/// Sample source selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceSelector {
    /// Random hourly prices ending now.
    Synthetic,
    /// coinranking price history over HTTP.
    Coinranking,
    /// JSON file given by --input.
    File,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DayBoundaryArg {
    /// Compare day-of-month numbers only.
    DayOfMonth,
    /// Compare full calendar dates.
    CalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FinalUpdateArg {
    /// Count the last sample twice before the trailing record.
    Repeat,
    /// Count the last sample once.
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmptyInputArg {
    /// Emit one all-null record for empty input.
    Emit,
    /// Emit nothing for empty input.
    Suppress,
}

/// Arguments shared by `trend` and `dispersion`.
#[derive(Debug, Args)]
pub struct SummarizeArgs {
    /// Where samples come from.
    #[arg(long, value_enum, default_value_t = SourceSelector::Synthetic)]
    pub source: SourceSelector,

    /// Sample file for `--source file`.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// History endpoint for `--source coinranking`.
    #[arg(long, env = FETCH_URL_ENV, default_value = DEFAULT_FETCH_URL)]
    pub fetch_url: String,

    /// Number of synthetic points.
    #[arg(long, default_value_t = DEFAULT_SYNTHETIC_POINTS)]
    pub points: usize,

    /// Seed for reproducible synthetic data.
    #[arg(long)]
    pub seed: Option<u64>,

    /// HTTP timeout in milliseconds.
    #[arg(long, default_value_t = 3_000)]
    pub timeout_ms: u64,

    /// JSON engine config file; flags below override it.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Day boundary rule.
    #[arg(long, value_enum)]
    pub day_boundary: Option<DayBoundaryArg>,

    /// Treatment of the last sample at end of input.
    #[arg(long, value_enum)]
    pub final_update: Option<FinalUpdateArg>,

    /// Behaviour for empty input.
    #[arg(long, value_enum)]
    pub empty_input: Option<EmptyInputArg>,
}

/// Arguments for the `sources` command.
#[derive(Debug, Args)]
pub struct SourcesArgs {
    /// Include source descriptions.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
