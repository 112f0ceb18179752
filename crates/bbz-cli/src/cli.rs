//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "bbz",
    version,
    about = "Edition editor pipeline - convert between editions, form state and payloads",
    long_about = "Run the Edition transformation pipeline on JSON files.\n\n\
                  Builds editor form state from a persisted edition, turns a submitted\n\
                  form state into a submission payload, and assembles creation-page props."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML file with bootstrap relationship rules.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the editor form state for a persisted edition.
    FormState(InputArgs),

    /// Print the submission payload for a submitted form state.
    Submit(SubmitArgs),

    /// Print creation-page props for an edition created in context.
    Create(CreateArgs),

    /// Summarize the aliases, identifiers and relationships of an edition.
    Inspect(InputArgs),
}

#[derive(Args)]
pub struct InputArgs {
    /// Path to a JSON file.
    #[arg(value_name = "JSON")]
    pub input: PathBuf,
}

#[derive(Args)]
pub struct SubmitArgs {
    /// Path to a form state JSON file.
    #[arg(value_name = "FORM_JSON")]
    pub input: PathBuf,

    /// Print only the edition-specific fields copied onto the revision.
    #[arg(long = "additional-props")]
    pub additional_props: bool,
}

#[derive(Args)]
pub struct CreateArgs {
    /// Fixture file with related entities and reference data.
    #[arg(long = "fixtures", value_name = "JSON")]
    pub fixtures: PathBuf,

    /// Bbid of the publisher the edition is created from.
    #[arg(long = "publisher", value_name = "BBID")]
    pub publisher: Option<String>,

    /// Bbid of the edition group the edition is created from.
    #[arg(long = "edition-group", value_name = "BBID")]
    pub edition_group: Option<String>,

    /// Bbid of the work the edition is created from.
    #[arg(long = "work", value_name = "BBID")]
    pub work: Option<String>,
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
