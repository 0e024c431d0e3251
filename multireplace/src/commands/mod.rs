// multireplace/src/commands/mod.rs
//! Subcommand implementations and the helpers they share.

pub mod apply;
pub mod check;
pub mod format;
pub mod show;

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io;
use std::path::Path;

use multireplace_core::StringReplaceMultiple;

use crate::cli::Commands;
use crate::ui::output_format;

/// Dispatches a parsed subcommand.
pub fn run(command: Commands, quiet: bool) -> Result<()> {
    match command {
        Commands::Apply(cmd) => {
            let settings = apply::resolve_settings(&cmd)?;
            let plugin = StringReplaceMultiple::new(settings);
            apply::run_apply(&plugin, apply::ApplyOptions::from_command(&cmd, quiet))
        }
        Commands::Check(cmd) => check::run_check(&cmd, quiet),
        Commands::Format(cmd) => format::run_format(&cmd),
        Commands::Show(cmd) => show::run_show(&cmd),
    }
}

/// Prints an info message to stderr unless `quiet`.
pub fn info_msg(msg: impl AsRef<str>, quiet: bool) {
    if quiet {
        return;
    }
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_info_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Prints a warning to stderr unless `quiet`.
pub fn warn_msg(msg: impl AsRef<str>, quiet: bool) {
    if quiet {
        return;
    }
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_warn_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Prints an error to stderr. Errors are never silenced.
pub fn error_msg(msg: impl AsRef<str>) {
    let stderr_supports_color = io::stderr().is_terminal();
    let _ = output_format::print_error_message(&mut io::stderr(), msg.as_ref(), stderr_supports_color);
}

/// Reads a whole file, naming it in the error.
pub(crate) fn read_file(path: &Path, what: &str) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {} {}", what, path.display()))
}
