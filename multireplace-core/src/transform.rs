// multireplace-core/src/transform.rs
//! The trim-then-match replacement itself.
//!
//! The probe (the trimmed input) must equal a table key exactly. When it does,
//! every occurrence of the probe inside the *untrimmed* input is replaced.
//! No match leaves the input as it was.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::table::ReplacementTable;
use crate::trim::TrimSpec;

/// The result of one transform call, with enough detail for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub output: String,
    /// The table key the probe matched, if any.
    pub matched_key: Option<String>,
    /// How many occurrences of the key were rewritten.
    pub replacements: usize,
}

impl TransformOutcome {
    pub(crate) fn unchanged(input: &str) -> Self {
        Self { output: input.to_string(), matched_key: None, replacements: 0 }
    }

    pub fn is_changed(&self) -> bool {
        self.replacements > 0
    }
}

/// Applies the table to `input` and returns the rewritten string.
pub fn transform(input: &str, table: &ReplacementTable, trim: &TrimSpec) -> String {
    transform_with_outcome(input, table, trim).output
}

/// Like [`transform`], but also reports which key matched and how often.
pub fn transform_with_outcome(input: &str, table: &ReplacementTable, trim: &TrimSpec) -> TransformOutcome {
    let probe = trim.probe(input);

    // An empty search string would match between every character.
    if probe.is_empty() {
        return TransformOutcome::unchanged(input);
    }

    let Some(replacement) = table.get(probe) else {
        return TransformOutcome::unchanged(input);
    };

    let replacements = input.matches(probe).count();
    debug!("Probe '{}' matched; replacing {} occurrence(s).", probe, replacements);

    TransformOutcome {
        output: input.replace(probe, replacement),
        matched_key: Some(probe.to_string()),
        replacements,
    }
}
