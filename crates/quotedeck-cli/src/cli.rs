//! CLI argument definitions for quotedeck.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `fetch` | Pull intraday records from the quote API into a CSV source |
//! | `view`  | Load, filter, and render the record store |
//!
//! # Examples
//!
//! ```bash
//! # Materialize a record source (reads QUOTEDECK_ALPHAVANTAGE_API_KEY)
//! quotedeck fetch AAPL --output stock_data.csv
//!
//! # Render a date window as a table
//! quotedeck view --start 2024-01-02 --end 2024-01-05
//!
//! # Full store as pretty JSON
//! quotedeck view --format json --pretty
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Load, filter, and present CSV stock price records.
#[derive(Debug, Parser)]
#[command(name = "quotedeck", version, about = "Stock record pipeline and viewer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch intraday records from the quote API into a CSV source
    Fetch(FetchArgs),
    /// Load, filter, and render the record store
    View(ViewArgs),
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Ticker symbol to request
    pub symbol: String,

    /// API credential; falls back to QUOTEDECK_ALPHAVANTAGE_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,

    /// Destination CSV path (overwritten on success)
    #[arg(long, default_value = "stock_data.csv")]
    pub output: String,

    /// Skip the request when the destination already exists
    #[arg(long)]
    pub if_missing: bool,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// CSV record source to load
    #[arg(long, default_value = "stock_data.csv")]
    pub source: String,

    /// Inclusive range start (YYYY-MM-DD); defaults to the store minimum
    #[arg(long)]
    pub start: Option<String>,

    /// Inclusive range end (YYYY-MM-DD); defaults to the store maximum
    #[arg(long)]
    pub end: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
