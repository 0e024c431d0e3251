//! This file defines the command-line interface (CLI) for the multireplace
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use multireplace_core::{parse_trim_amount, TrimMode};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "multireplace",
    version = env!("CARGO_PKG_VERSION"),
    about = "Replace configured words or phrases in piped values",
    long_about = "multireplace looks each value up in a table of source strings, optionally after trimming a fixed number of characters from either end, and replaces every occurrence of the matched source string with its replacement.",
    arg_required_else_help = true,
)]
pub struct Cli {
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Applies the replacement table to an input file or stdin.
    #[command(about = "Applies the replacement table to an input file or stdin.")]
    Apply(ApplyCommand),

    /// Validates an allowed values file (one `source|replacement` per line).
    #[command(about = "Validates an allowed values file and prints it normalized.")]
    Check(CheckCommand),

    /// Prints the table of a settings file in `source|replacement` form.
    #[command(about = "Prints the table of a settings file as editable text.")]
    Format(FormatCommand),

    /// Prints the resolved settings.
    #[command(about = "Prints the resolved settings as YAML or JSON.")]
    Show(ShowCommand),
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    #[arg(long = "settings", value_name = "FILE", help = "Path to a settings file (YAML). Overrides MULTIREPLACE_SETTINGS.")]
    pub settings: Option<PathBuf>,

    #[arg(long = "pairs", value_name = "FILE", help = "Replace the settings table with the pairs in this file.")]
    pub pairs: Option<PathBuf>,

    #[arg(long = "bare-keys", help = "Let lines without '|' in the pairs file act as their own key.")]
    pub bare_keys: bool,

    #[arg(long = "trim-left", value_name = "N", value_parser = parse_trim_left_arg, help = "Characters to trim from the left before lookup.")]
    pub trim_left: Option<usize>,

    #[arg(long = "trim-right", value_name = "N", value_parser = parse_trim_right_arg, help = "Characters to trim from the right before lookup.")]
    pub trim_right: Option<usize>,

    #[arg(long = "trim-mode", value_name = "MODE", value_enum, help = "How --trim-left is applied.")]
    pub trim_mode: Option<TrimModeChoice>,

    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    #[arg(long = "line-buffered", conflicts_with = "diff", help = "Treat every line as a separate value and stream the output.")]
    pub line_buffered: bool,

    #[arg(long, short = 'D', help = "Show a diff of the changes made.")]
    pub diff: bool,

    #[arg(long = "no-summary", help = "Suppress the replacement summary.")]
    pub no_summary: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[arg(value_name = "PAIRS_FILE", help = "The allowed values file to validate.")]
    pub pairs: PathBuf,

    #[arg(long = "previous", value_name = "FILE", help = "Settings file holding the table being edited.")]
    pub previous: Option<PathBuf>,

    #[arg(long = "has-data", help = "Stored data references this table; forbids positional keys and checks removals.")]
    pub has_data: bool,

    #[arg(long = "in-use", value_name = "KEYS", value_delimiter = ',', help = "Keys referenced by stored data (comma-separated).")]
    pub in_use: Vec<String>,

    #[arg(long = "bare-keys", help = "Let lines without '|' act as their own key.")]
    pub bare_keys: bool,
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatCommand {
    #[arg(value_name = "SETTINGS_FILE", help = "The settings file to render.")]
    pub settings: PathBuf,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowCommand {
    #[arg(value_name = "SETTINGS_FILE", help = "Settings file; defaults to the standard search paths.")]
    pub settings: Option<PathBuf>,

    #[arg(long = "json", help = "Print JSON instead of YAML.")]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TrimModeChoice {
    /// Keep the first N characters.
    KeepPrefix,
    /// Drop the first N characters.
    DropPrefix,
}

impl From<TrimModeChoice> for TrimMode {
    fn from(choice: TrimModeChoice) -> Self {
        match choice {
            TrimModeChoice::KeepPrefix => TrimMode::KeepPrefix,
            TrimModeChoice::DropPrefix => TrimMode::DropPrefix,
        }
    }
}

fn parse_trim_arg(field: &'static str, raw: &str) -> Result<usize, String> {
    match parse_trim_amount(field, raw) {
        Ok(Some(n)) => Ok(n),
        Ok(None) => Err(format!("{}: a value is required.", field)),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_trim_left_arg(raw: &str) -> Result<usize, String> {
    parse_trim_arg("trim_left", raw)
}

fn parse_trim_right_arg(raw: &str) -> Result<usize, String> {
    parse_trim_arg("trim_right", raw)
}
