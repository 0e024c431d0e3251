// multireplace-core/src/trim.rs
//! Trim settings applied to a value before it is looked up in the table.
//!
//! Trimming only shapes the *probe*; the value that gets rewritten is always
//! the untrimmed input. Counts are in `char`s, so a trim never splits a
//! code point.
//!
//! License: MIT OR APACHE 2.0

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// How `trim_left` is interpreted.
///
/// `KeepPrefix` keeps the first N characters of the right-trimmed value. It is
/// what deployed configurations were written against and stays the default,
/// even though the setting is described as removing characters from the left.
/// `DropPrefix` removes the first N characters instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrimMode {
    #[default]
    KeepPrefix,
    DropPrefix,
}

/// Character counts to trim from each side of the probe. `None` and `Some(0)`
/// both mean "leave that side alone".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimSpec {
    pub left: Option<usize>,
    pub right: Option<usize>,
    pub mode: TrimMode,
}

impl TrimSpec {
    pub fn new(left: Option<usize>, right: Option<usize>) -> Self {
        Self { left, right, mode: TrimMode::default() }
    }

    pub fn with_mode(mut self, mode: TrimMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn is_noop(&self) -> bool {
        self.left.unwrap_or(0) == 0 && self.right.unwrap_or(0) == 0
    }

    /// Derives the lookup probe from `input`: right trim first, then left.
    pub fn probe<'a>(&self, input: &'a str) -> &'a str {
        let mut probe = input;
        if let Some(n) = self.right.filter(|&n| n > 0) {
            probe = drop_suffix(probe, n);
        }
        if let Some(n) = self.left.filter(|&n| n > 0) {
            probe = match self.mode {
                TrimMode::KeepPrefix => keep_prefix(probe, n),
                TrimMode::DropPrefix => drop_prefix(probe, n),
            };
        }
        probe
    }
}

fn drop_suffix(s: &str, n: usize) -> &str {
    match s.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &s[..idx],
        None => "",
    }
}

fn keep_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn drop_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[idx..],
        None => "",
    }
}

/// Parses a trim amount as typed into a settings field.
///
/// Blank input means "not set". Anything other than a non-negative integer
/// is rejected rather than coerced.
pub fn parse_trim_amount(field: &'static str, raw: &str) -> Result<Option<usize>, ConfigError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidTrim { field, value: raw.to_string() });
    }
    raw.parse::<usize>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidTrim { field, value: raw.to_string() })
}
