//! CLI argument definitions for the visa guide.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use visa_model::Purpose;

#[derive(Parser)]
#[command(
    name = "visa-guide",
    version,
    about = "Visa Guide - look up entry requirements and regenerate the visa matrix",
    long_about = "Look up visa and entry requirements between a citizenship and a destination,\n\
                  and regenerate the per-destination visa matrix from the upstream\n\
                  passport-index dataset."
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
    /// Regenerate the visa matrix blocks in the per-destination rule files.
    Generate(GenerateArgs),

    /// Look up entry requirements for a citizenship/destination pair.
    Lookup(LookupArgs),

    /// List the known country catalog.
    Countries,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Root directory holding one subdirectory per destination code.
    #[arg(long = "rules-root", value_name = "DIR", default_value = "rules")]
    pub rules_root: PathBuf,

    /// Override the dataset download URL.
    #[arg(long = "url", value_name = "URL", conflicts_with = "input")]
    pub url: Option<String>,

    /// Read the dataset from a local CSV file instead of downloading it.
    #[arg(long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Report which files would change without writing anything.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Citizenship country code (e.g. FR).
    #[arg(value_name = "CITIZENSHIP")]
    pub citizenship: String,

    /// Destination country code (e.g. US).
    #[arg(value_name = "DESTINATION")]
    pub destination: String,

    /// Purpose of travel.
    #[arg(long = "purpose", value_enum, default_value = "tourism")]
    pub purpose: PurposeArg,

    /// Planned stay length in days.
    #[arg(long = "stay", value_name = "DAYS")]
    pub stay: Option<u32>,

    /// Transit country code for a layover leg.
    #[arg(long = "transit", value_name = "CODE")]
    pub transit: Option<String>,

    /// Layover duration in hours.
    #[arg(long = "transit-hours", value_name = "HOURS")]
    pub transit_hours: Option<u32>,

    /// Root directory holding one subdirectory per destination code.
    #[arg(long = "rules-root", value_name = "DIR", default_value = "rules")]
    pub rules_root: PathBuf,
}

/// CLI purpose choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PurposeArg {
    Tourism,
    Business,
    Transit,
}

impl From<PurposeArg> for Purpose {
    fn from(arg: PurposeArg) -> Self {
        match arg {
            PurposeArg::Tourism => Purpose::Tourism,
            PurposeArg::Business => Purpose::Business,
            PurposeArg::Transit => Purpose::Transit,
        }
    }
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
