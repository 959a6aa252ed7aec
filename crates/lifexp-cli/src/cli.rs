//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lifexp",
    version,
    about = "Clean Eurostat life-expectancy data into a canonical long-format table",
    long_about = "Load a raw life-expectancy export (.tsv or .json), reshape and filter it\n\
                  to one region, coerce year/value to numeric types, drop invalid rows,\n\
                  and write the result as CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for humans, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a raw data file and write the canonical CSV.
    Clean(CleanArgs),

    /// List the recognized region codes.
    Regions,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Path to the raw data file (.tsv or .json).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Region code to keep (case-insensitive).
    #[arg(long = "country", value_name = "CODE", default_value = "PT")]
    pub country: String,

    /// Output CSV path (default: <input dir>/<code>_life_expectancy.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
