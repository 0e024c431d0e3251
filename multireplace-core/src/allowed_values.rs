// multireplace-core/src/allowed_values.rs
//! Parsing, validation and rendering of the "allowed values" text.
//!
//! The editable form of a replacement table is one pair per line:
//!
//! ```text
//! Source String|Replacement String
//! ```
//!
//! Lines without a `|` are either their own key (when the [`KeyRule`] allows
//! it) or are keyed by their line position. A single list may not mix
//! generated keys with explicit ones.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

use crate::errors::ConfigError;
use crate::table::{removed_keys, ReplacementTable};

// Greedy first group: the key runs up to the last `|` on the line.
static PAIR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.*)\|(.*)$").expect("static pattern"));

/// Which bare lines (lines without a `|`) may act as their own key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyRule {
    /// Only `key|value` lines carry keys. Bare lines get positional keys.
    #[default]
    Explicit,
    /// Any non-empty bare line is used as both key and value.
    BareText,
}

/// Answers whether stored data still references any of the given keys.
pub trait ValuesInUse {
    /// Returns the subset of `keys` that are currently in use.
    fn keys_in_use(&self, keys: &BTreeSet<String>) -> BTreeSet<String>;
}

/// A collaborator for fields that have no stored data yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStoredData;

impl ValuesInUse for NoStoredData {
    fn keys_in_use(&self, _keys: &BTreeSet<String>) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

impl ValuesInUse for HashSet<String> {
    fn keys_in_use(&self, keys: &BTreeSet<String>) -> BTreeSet<String> {
        keys.iter().filter(|k| self.contains(*k)).cloned().collect()
    }
}

impl ValuesInUse for BTreeSet<String> {
    fn keys_in_use(&self, keys: &BTreeSet<String>) -> BTreeSet<String> {
        keys.intersection(self).cloned().collect()
    }
}

/// Checks whether `candidate` is usable as a key under `rule`.
///
/// Returns an error message for unusable candidates, `None` otherwise.
pub fn validate_allowed_value(candidate: &str, rule: KeyRule) -> Option<String> {
    if candidate.trim().is_empty() {
        return Some("keys may not be empty.".to_string());
    }
    if candidate.trim() != candidate {
        return Some(format!("key '{}' may not start or end with whitespace.", candidate.escape_debug()));
    }
    if candidate.contains('\n') || candidate.contains('\r') {
        return Some(format!("key '{}' may not span lines.", candidate.escape_debug()));
    }
    if candidate.contains('|') {
        return Some(format!("key '{}' may not contain '|'.", candidate));
    }
    match rule {
        KeyRule::Explicit => Some(format!("'{}' needs an explicit key, as in '{}|{}'.", candidate, candidate, candidate)),
        KeyRule::BareText => None,
    }
}

/// Parses the allowed values text with the default [`KeyRule::Explicit`].
pub fn parse_table(raw: &str, field_has_data: bool) -> Result<ReplacementTable, ConfigError> {
    parse_table_with(raw, field_has_data, KeyRule::default())
}

/// Parses the allowed values text into a table.
///
/// `field_has_data` forbids positional keys, since renumbering lines would
/// silently change what stored keys point at.
pub fn parse_table_with(raw: &str, field_has_data: bool, rule: KeyRule) -> Result<ReplacementTable, ConfigError> {
    let mut table = ReplacementTable::new();
    let mut generated_keys = false;
    let mut explicit_keys = false;

    let lines = raw
        .split('\n')
        .map(str::trim)
        .enumerate()
        .filter(|(_, text)| !text.is_empty());

    for (position, text) in lines {
        let (key, value) = if let Some(caps) = PAIR_LINE.captures(text) {
            explicit_keys = true;
            (caps[1].trim().to_string(), caps[2].trim().to_string())
        } else if validate_allowed_value(text, rule).is_none() {
            explicit_keys = true;
            (text.to_string(), text.to_string())
        } else if !field_has_data {
            generated_keys = true;
            (position.to_string(), text.to_string())
        } else {
            debug!("Line {} ('{}') cannot be keyed once the field has data.", position, text);
            return Err(ConfigError::InvalidAllowedValues);
        };

        if let Some(previous) = table.insert(key.clone(), value) {
            warn!("Duplicate key '{}' in allowed values; '{}' is overwritten.", key, previous);
        }
    }

    if explicit_keys && generated_keys {
        debug!("Allowed values mix explicit and positional keys.");
        return Err(ConfigError::InvalidAllowedValues);
    }

    debug!("Parsed {} allowed value(s).", table.len());
    Ok(table)
}

/// Renders a table back into editable text, one `key|value` per line.
pub fn format_table(table: &ReplacementTable) -> String {
    table
        .iter()
        .map(|(k, v)| format!("{}|{}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Validates a submitted allowed values text against the stored table.
///
/// Parses `raw`, checks each key, and, once the field has data, refuses to
/// drop keys that `usage` reports as still referenced. Returns the parsed
/// table for the caller to store.
pub fn validate_allowed_values(
    raw: &str,
    field_has_data: bool,
    previous: &ReplacementTable,
    rule: KeyRule,
    usage: &dyn ValuesInUse,
) -> Result<ReplacementTable, ConfigError> {
    let values = parse_table_with(raw, field_has_data, rule)?;

    // Shape check only; every key here already came from a valid line.
    for key in values.keys() {
        if let Some(message) = validate_allowed_value(key, KeyRule::BareText) {
            return Err(ConfigError::InvalidAllowedValue(message));
        }
    }

    if field_has_data {
        let lost = removed_keys(previous, &values);
        let in_use = usage.keys_in_use(&lost);
        if !in_use.is_empty() {
            warn!("Edit would remove {} key(s) still in use.", in_use.len());
            return Err(ConfigError::ValuesInUse { keys: in_use.into_iter().collect() });
        }
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_explicit_pairs() {
        let table = parse_table("a|b\nc|d", false).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("a", "b"), ("c", "d")]);
        assert_eq!(format_table(&table), "a|b\nc|d");
    }

    #[test]
    fn test_pairs_are_trimmed_and_blank_lines_dropped() {
        let table = parse_table("  Neo Vim |  Neovim \n\n   \r\nhome manager|Home Manager\r\n", true).unwrap();
        assert_eq!(
            table.iter().collect::<Vec<_>>(),
            vec![("Neo Vim", "Neovim"), ("home manager", "Home Manager")]
        );
    }

    #[test]
    fn test_key_runs_to_last_pipe() {
        let table = parse_table("a|b|c", true).unwrap();
        assert_eq!(table.get("a|b"), Some("c"));
    }

    #[test]
    fn test_empty_sides_are_allowed_in_explicit_pairs() {
        let table = parse_table("remove me|", true).unwrap();
        assert_eq!(table.get("remove me"), Some(""));
    }

    #[test]
    fn test_positional_keys_use_original_line_index() {
        let table = parse_table("x\ny", false).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("0", "x"), ("1", "y")]);

        let table = parse_table("x\n\ny", false).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("0", "x"), ("2", "y")]);
    }

    #[test]
    fn test_mixed_explicit_and_positional_is_invalid() {
        assert_eq!(parse_table("a|b\nx", false), Err(ConfigError::InvalidAllowedValues));
    }

    #[test]
    fn test_bare_line_with_data_is_invalid() {
        assert_eq!(parse_table("x", true), Err(ConfigError::InvalidAllowedValues));
    }

    #[test]
    fn test_bare_text_rule_uses_line_as_key() {
        let table = parse_table_with("x\ny|z", true, KeyRule::BareText).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("x", "x"), ("y", "z")]);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let table = parse_table("a|1\nb|2\na|3", true).unwrap();
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![("a", "3"), ("b", "2")]);
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(parse_table("", true).unwrap().is_empty());
        assert!(parse_table("\n \n", false).unwrap().is_empty());
        assert_eq!(format_table(&ReplacementTable::new()), "");
    }

    #[test]
    fn test_validate_allowed_value() {
        assert!(validate_allowed_value("", KeyRule::BareText).is_some());
        assert!(validate_allowed_value("   ", KeyRule::BareText).is_some());
        assert!(validate_allowed_value("a\nb", KeyRule::BareText).is_some());
        assert!(validate_allowed_value("a|b", KeyRule::BareText).is_some());
        assert!(validate_allowed_value(" word ", KeyRule::BareText).is_some());
        assert!(validate_allowed_value("two words", KeyRule::BareText).is_none());
        assert!(validate_allowed_value("word", KeyRule::BareText).is_none());
        assert!(validate_allowed_value("word", KeyRule::Explicit).is_some());
    }

    #[test]
    fn test_explicit_empty_key_fails_validation() {
        let result = validate_allowed_values("|value", false, &ReplacementTable::new(), KeyRule::Explicit, &NoStoredData);
        assert!(matches!(result, Err(ConfigError::InvalidAllowedValue(_))));
    }

    #[test]
    fn test_removing_keys_in_use_is_rejected_only_with_data() {
        let previous = parse_table("a|1\nb|2", true).unwrap();
        let in_use: BTreeSet<String> = ["a".to_string()].into_iter().collect();

        let result = validate_allowed_values("b|2", true, &previous, KeyRule::Explicit, &in_use);
        assert_eq!(result, Err(ConfigError::ValuesInUse { keys: vec!["a".to_string()] }));

        let result = validate_allowed_values("b|2", false, &previous, KeyRule::Explicit, &in_use);
        assert!(result.is_ok());

        // Dropping an unused key is fine even with data.
        let result = validate_allowed_values("a|1", true, &previous, KeyRule::Explicit, &in_use);
        assert!(result.is_ok());
    }
}
