//! CLI argument definitions for the quoting tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "blindquote",
    version,
    about = "Roller-blind quoting tool - price quote documents against a rate file",
    long_about = "Price roller-blind quote documents against a rate file.\n\n\
                  Looks each item up in the per-fabric price matrix, aggregates\n\
                  accessory lines, and writes the priced document back as JSON\n\
                  or CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Price a quote document against a rate file.
    Price(PriceArgs),

    /// List the fabric types a rate file can price.
    Fabrics(FabricsArgs),

    /// Write a fresh empty quote document.
    Init(InitArgs),
}

#[derive(Parser)]
pub struct PriceArgs {
    /// Path to the rate file (matrices, accessory prices, fabric sequence).
    #[arg(value_name = "RATES")]
    pub rates: PathBuf,

    /// Path to the quote document to price.
    #[arg(value_name = "QUOTE")]
    pub quote: PathBuf,

    /// Write the priced document as JSON to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the priced document as CSV to this path.
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Parser)]
pub struct FabricsArgs {
    /// Path to the rate file.
    #[arg(value_name = "RATES")]
    pub rates: PathBuf,
}

#[derive(Parser)]
pub struct InitArgs {
    /// Where to write the new quote document.
    #[arg(long = "output", value_name = "PATH", default_value = "quote.json")]
    pub output: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
