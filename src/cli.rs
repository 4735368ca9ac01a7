use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::transport::TransportMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "co2-calc")]
#[command(author, version, about = "Estimate the CO2 emissions of a trip")]
#[command(long_about = "Estimate the CO2 emissions of a trip by car, plane, train or bus,\n\
    with streaming, tree and bike equivalences and bar charts.\n\n\
    Exit codes:\n  \
    0 - Success (including an unusable distance, which prints a prompt)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate the emissions of one trip
    Calc(CalcArgs),

    /// Compare emissions of every transport mode over a distance
    Compare(CompareArgs),

    /// Drive the calculator interactively with events read from stdin
    Session(SessionArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CalcArgs {
    /// Transport mode [possible values: car, plane, train, bus]
    #[arg(short, long, default_value = "car")]
    pub mode: TransportMode,

    /// Distance travelled in km
    #[arg(short, long, allow_hyphen_values = true)]
    pub distance: String,

    /// Output format [possible values: text, json, html]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Distance travelled in km
    #[arg(short, long, allow_hyphen_values = true)]
    pub distance: String,

    /// Output format [possible values: text, json, html]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct SessionArgs {
    /// Rewrite an HTML page with the current display after every event
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".co2-calc.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
