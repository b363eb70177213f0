//! CLI argument definitions for the census converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "census",
    version,
    about = "Employer census converter - normalize vendor census sheets for carrier upload",
    long_about = "Normalize employer census exports into a canonical schema.\n\n\
                  Resolves noisy headers, canonicalizes dates, ZIP codes and coverage codes,\n\
                  reports row-level issues, and renders the fixed carrier layout."
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

    /// Allow names and birth dates in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a census file and write the canonical table plus issues.
    Normalize(NormalizeArgs),

    /// Normalize, project onto the carrier layout, and write it.
    Convert(ConvertArgs),

    /// Show how each source header resolves.
    Headers(SourceArgs),

    /// List the header alias table and fallback rules.
    Aliases,
}

/// Input file and row selection.
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Census CSV export.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Spreadsheet row holding the column headers (1-based).
    #[arg(long = "header-row", value_name = "ROW", default_value_t = 1)]
    pub header_row: usize,

    /// First spreadsheet row holding data (default: the row after the header).
    #[arg(long = "first-data-row", value_name = "ROW")]
    pub first_data_row: Option<usize>,
}

/// Where and whether to write files.
#[derive(Args, Clone)]
pub struct OutputArgs {
    /// Output directory (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print the run report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Clone)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Company name (overrides the value read from cell C5).
    #[arg(long = "company")]
    pub company: Option<String>,

    /// Company address (overrides cell C6).
    #[arg(long = "address")]
    pub address: Option<String>,

    /// Federal employer ID (overrides cell C8).
    #[arg(long = "fein")]
    pub fein: Option<String>,

    /// SIC code (overrides cell E7).
    #[arg(long = "sic")]
    pub sic: Option<String>,
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
