//! CLI argument definitions for the partner field viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "leadfield",
    version,
    about = "Partner lead field viewer - classify and arrange dynamic partner fields",
    long_about = "Classify the dynamic partner fields attached to a sales lead.\n\n\
                  Fields are typed (text, number, date), phone prefixes are\n\
                  reformatted, and the result is split into a visible head, a\n\
                  collapsible overflow, and two dependency-gated groups."
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

    /// Allow field values (contact details) in debug log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the partner fields of a lead from a payload file.
    Fields(FieldsArgs),

    /// List the contact-detail labels that always render as text.
    Labels,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Path to the partner field response JSON ({"fields": {...}}).
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Lead identifier used for log correlation (default: payload file stem).
    #[arg(long = "lead-id", value_name = "ID")]
    pub lead_id: Option<String>,

    /// Show the overflow fields inline instead of collapsing them.
    #[arg(long = "expanded")]
    pub expanded: bool,

    /// Print the partition as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
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
