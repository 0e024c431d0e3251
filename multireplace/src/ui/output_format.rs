// multireplace/src/ui/output_format.rs
//! Formats status messages and the replacement summary for stderr.
//!
//! Colour is applied only when the caller says the stream supports it.

use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::{self, Write};

use multireplace_core::TransformOutcome;

/// Totals collected over a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplacementSummary {
    pub values: usize,
    pub changed: usize,
    /// Occurrences replaced, per matched key.
    pub per_key: BTreeMap<String, usize>,
}

impl ReplacementSummary {
    pub fn record(&mut self, outcome: &TransformOutcome) {
        self.values += 1;
        if let Some(key) = &outcome.matched_key {
            self.changed += 1;
            *self.per_key.entry(key.clone()).or_default() += outcome.replacements;
        }
    }
}

pub fn print_info_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{}", msg.cyan())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Warning:".yellow().bold(), msg.yellow())
    } else {
        writeln!(writer, "Warning: {}", msg)
    }
}

pub fn print_error_message<W: Write>(writer: &mut W, msg: &str, supports_color: bool) -> io::Result<()> {
    if supports_color {
        writeln!(writer, "{} {}", "Error:".red().bold(), msg.red())
    } else {
        writeln!(writer, "Error: {}", msg)
    }
}

pub fn print_summary<W: Write>(summary: &ReplacementSummary, writer: &mut W, supports_color: bool) -> io::Result<()> {
    let header = format!("Replacement summary: {} of {} value(s) changed.", summary.changed, summary.values);
    if supports_color {
        writeln!(writer, "{}", header.bold())?;
    } else {
        writeln!(writer, "{}", header)?;
    }

    for (key, count) in &summary.per_key {
        if supports_color {
            writeln!(writer, "  {}: {} occurrence(s)", key.magenta(), count.green())?;
        } else {
            writeln!(writer, "  {}: {} occurrence(s)", key, count)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_record_and_print() {
        let mut summary = ReplacementSummary::default();
        summary.record(&TransformOutcome { output: "b b".into(), matched_key: Some("a".into()), replacements: 2 });
        summary.record(&TransformOutcome { output: "zzz".into(), matched_key: None, replacements: 0 });
        summary.record(&TransformOutcome { output: "b".into(), matched_key: Some("a".into()), replacements: 1 });

        let mut buf = Vec::new();
        print_summary(&summary, &mut buf, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Replacement summary: 2 of 3 value(s) changed.\n  a: 3 occurrence(s)\n");
    }

    #[test]
    fn test_plain_messages() {
        let mut buf = Vec::new();
        print_warn_message(&mut buf, "careful", false).unwrap();
        print_error_message(&mut buf, "broken", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Warning: careful\nError: broken\n");
    }
}
