//! CLI argument definitions for the map configuration validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mapcfg",
    version,
    about = "Map configuration validator - pre-flight checks for renderer configs",
    long_about = "Validate a JSON map configuration against a declarative parameter\n\
                  specification before it reaches the renderer.\n\n\
                  Every violation surfaces in one pass: errors reject the\n\
                  configuration, warnings and suggestions never do."
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
    /// Validate a configuration file against a parameter specification.
    Validate(ValidateArgs),

    /// List the parameters a specification declares.
    Parameters(ParametersArgs),

    /// Print an example configuration.
    Example,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to the JSON configuration file to validate.
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Parameter specification to validate against (default: the built-in
    /// map-ui specification).
    #[arg(long = "spec", value_name = "PATH")]
    pub spec: Option<PathBuf>,

    /// Write a JSON validation report to this path.
    #[arg(long = "report-file", value_name = "PATH")]
    pub report_file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ParametersArgs {
    /// Parameter specification to list (default: the built-in map-ui
    /// specification).
    #[arg(long = "spec", value_name = "PATH")]
    pub spec: Option<PathBuf>,
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
