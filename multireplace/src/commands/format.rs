//! `format` command: renders a settings table as editable pair text.

use anyhow::Result;

use multireplace_core::{format_table, PluginSettings};

use crate::cli::FormatCommand;

pub fn run_format(cmd: &FormatCommand) -> Result<()> {
    let settings = PluginSettings::load_from_file(&cmd.settings)?;
    let text = format_table(&settings.allowed_values);
    if !text.is_empty() {
        println!("{}", text);
    }
    Ok(())
}
