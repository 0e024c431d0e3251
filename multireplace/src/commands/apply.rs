//! `apply` command: runs the replacement over a whole input or line by line.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::PathBuf;

use multireplace_core::{
    headless_tamper_line, headless_tamper_whole, load_settings, parse_table_with, KeyRule, PluginSettings, Tamper,
};

use crate::cli::ApplyCommand;
use crate::commands::{info_msg, read_file, warn_msg};
use crate::ui::diff_viewer;
use crate::ui::output_format::{self, ReplacementSummary};

/// Options for `run_apply`, independent of how they were parsed.
pub struct ApplyOptions {
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub line_buffered: bool,
    pub diff: bool,
    pub no_summary: bool,
    pub quiet: bool,
}

impl ApplyOptions {
    pub fn from_command(cmd: &ApplyCommand, quiet: bool) -> Self {
        Self {
            input_file: cmd.input_file.clone(),
            output_path: cmd.output.clone(),
            line_buffered: cmd.line_buffered,
            diff: cmd.diff,
            no_summary: cmd.no_summary,
            quiet,
        }
    }
}

/// Builds the settings for a run: file settings first, then command-line
/// overrides.
pub fn resolve_settings(cmd: &ApplyCommand) -> Result<PluginSettings> {
    let mut settings = load_settings(cmd.settings.as_deref())?;

    if let Some(path) = &cmd.pairs {
        let raw = read_file(path, "pairs file")?;
        let rule = if cmd.bare_keys { KeyRule::BareText } else { KeyRule::Explicit };
        settings.allowed_values = parse_table_with(&raw, true, rule)
            .with_context(|| format!("Invalid pairs file {}", path.display()))?;
        info!("Using {} pair(s) from {}.", settings.allowed_values.len(), path.display());
    }

    if let Some(n) = cmd.trim_left {
        settings.trim_left = Some(n);
    }
    if let Some(n) = cmd.trim_right {
        settings.trim_right = Some(n);
    }
    if let Some(mode) = cmd.trim_mode {
        settings.trim_mode = mode.into();
    }

    settings.validate()?;
    Ok(settings)
}

/// The main operation runner for `apply`.
pub fn run_apply(plugin: &dyn Tamper, opts: ApplyOptions) -> Result<()> {
    info!("Starting apply operation.");

    let source_id = opts
        .input_file
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let reader: Box<dyn BufRead> = match &opts.input_file {
        Some(path) => Box::new(BufReader::new(
            fs::File::open(path).with_context(|| format!("Failed to open input file {}", path.display()))?,
        )),
        None => {
            debug!("Reading input from stdin...");
            Box::new(BufReader::new(io::stdin()))
        }
    };

    let writer: Box<dyn Write> = match &opts.output_path {
        Some(path) => {
            info_msg(format!("Writing output to file: {}", path.display()), opts.quiet);
            Box::new(
                fs::File::create(path).with_context(|| format!("Failed to create output file {}", path.display()))?,
            )
        }
        None => Box::new(io::stdout().lock()),
    };

    let summary = if opts.line_buffered {
        apply_lines(plugin, reader, writer, &source_id)?
    } else {
        apply_whole(plugin, reader, writer, &source_id, &opts)?
    };

    if plugin.settings().allowed_values.is_empty() {
        warn_msg("The replacement table is empty; input was passed through unchanged.", opts.quiet);
    }

    if !opts.no_summary && !opts.quiet {
        let stderr_supports_color = io::stderr().is_terminal();
        output_format::print_summary(&summary, &mut io::stderr(), stderr_supports_color)?;
    }

    info!("Apply operation completed.");
    Ok(())
}

/// Treats the whole input, minus one trailing line ending, as one value.
/// The ending is written back as it was read.
fn apply_whole(
    plugin: &dyn Tamper,
    mut reader: Box<dyn BufRead>,
    mut writer: Box<dyn Write>,
    source_id: &str,
    opts: &ApplyOptions,
) -> Result<ReplacementSummary> {
    let mut input = String::new();
    reader.read_to_string(&mut input).context("Failed to read input")?;

    let (outcome, ending) = headless_tamper_whole(plugin, &input, source_id);
    debug!("Input of {} byte(s) read; changed: {}.", input.len(), outcome.is_changed());

    if opts.diff {
        let supports_color = opts.output_path.is_none() && io::stdout().is_terminal();
        let value = &input[..input.len() - ending.len()];
        diff_viewer::print_diff(value, &outcome.output, &mut writer, supports_color)?;
    } else {
        writer.write_all(outcome.output.as_bytes())?;
        writer.write_all(ending.as_bytes())?;
    }
    writer.flush()?;

    let mut summary = ReplacementSummary::default();
    summary.record(&outcome);
    Ok(summary)
}

/// Treats every line as its own value, writing each result as soon as it is
/// ready.
fn apply_lines(
    plugin: &dyn Tamper,
    mut reader: Box<dyn BufRead>,
    mut writer: Box<dyn Write>,
    source_id: &str,
) -> Result<ReplacementSummary> {
    let mut summary = ReplacementSummary::default();
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read input line")?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let (outcome, ending) = headless_tamper_line(plugin, &line, source_id, line_number);

        writer.write_all(outcome.output.as_bytes())?;
        writer.write_all(ending.as_bytes())?;
        writer.flush()?;

        summary.record(&outcome);
    }

    debug!("Processed {} line(s).", line_number);
    Ok(summary)
}
