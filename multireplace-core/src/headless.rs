// multireplace-core/src/headless.rs
//! Entry points for running a plugin over raw input, outside any pipeline.
//!
//! Both helpers hand the trailing line ending back to the caller untouched,
//! so output keeps the exact shape of the input.

use crate::tamper::{SourceItem, Tamper};
use crate::transform::TransformOutcome;

/// Transforms a whole input as one value.
///
/// One trailing `\n` or `\r\n` is not part of the value; it is returned as
/// the second element for the caller to write back.
///
/// # Arguments
///
/// * `plugin` - The plugin to run.
/// * `content` - The complete input.
/// * `source_id` - A stable identifier for where the input came from.
pub fn headless_tamper_whole<'a>(plugin: &dyn Tamper, content: &'a str, source_id: &str) -> (TransformOutcome, &'a str) {
    let (value, ending) = split_line_ending(content);
    let item = SourceItem::new(source_id);
    (plugin.tamper_with_outcome(value, Some(&item)), ending)
}

/// Transforms a single line read from `source_id`.
///
/// The item id is `source_id:line_number`. The line's own ending, possibly
/// empty on a final line, is returned alongside the outcome.
pub fn headless_tamper_line<'a>(
    plugin: &dyn Tamper,
    line: &'a str,
    source_id: &str,
    line_number: usize,
) -> (TransformOutcome, &'a str) {
    let (value, ending) = split_line_ending(line);
    let item = SourceItem::new(format!("{}:{}", source_id, line_number));
    (plugin.tamper_with_outcome(value, Some(&item)), ending)
}

/// Splits a line into its text and its `\n` or `\r\n` terminator.
pub fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}
