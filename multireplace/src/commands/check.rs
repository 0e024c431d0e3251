//! `check` command: validates an allowed values file the way a settings form
//! would, and prints the normalized table.

use anyhow::{Context, Result};
use log::debug;
use std::collections::HashSet;

use multireplace_core::{format_table, removed_keys, validate_allowed_values, KeyRule, PluginSettings};

use crate::cli::CheckCommand;
use crate::commands::{info_msg, read_file};

pub fn run_check(cmd: &CheckCommand, quiet: bool) -> Result<()> {
    let raw = read_file(&cmd.pairs, "allowed values file")?;

    let previous = match &cmd.previous {
        Some(path) => PluginSettings::load_from_file(path)?.allowed_values,
        None => Default::default(),
    };
    let in_use: HashSet<String> = cmd.in_use.iter().map(|k| k.trim().to_string()).collect();
    let rule = if cmd.bare_keys { KeyRule::BareText } else { KeyRule::Explicit };
    debug!("Checking {} with {} key(s) marked in use.", cmd.pairs.display(), in_use.len());

    let table = validate_allowed_values(&raw, cmd.has_data, &previous, rule, &in_use)
        .with_context(|| format!("{} failed validation", cmd.pairs.display()))?;

    println!("{}", format_table(&table));

    let removed = removed_keys(&previous, &table);
    if !removed.is_empty() {
        let keys: Vec<&str> = removed.iter().map(String::as_str).collect();
        info_msg(format!("Removed keys: {}", keys.join(", ")), quiet);
    }
    info_msg(format!("{} pair(s) are valid.", table.len()), quiet);
    Ok(())
}
