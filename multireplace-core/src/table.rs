// multireplace-core/src/table.rs
//! The replacement table: an insertion-ordered `source -> replacement` map.
//!
//! Backed by an `IndexMap`: iteration follows insertion order so the table
//! renders back to text in the order it was written. Re-inserting an
//! existing key overwrites its value in place.
//!
//! License: MIT OR APACHE 2.0

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered mapping from source strings to their replacements.
///
/// Equality is order-sensitive: two tables that list the same pairs in a
/// different order render to different text.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ReplacementTable {
    entries: IndexMap<String, String>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a pair, returning the previous replacement if `key` was present.
    /// An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl PartialEq for ReplacementTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for ReplacementTable {}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ReplacementTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = ReplacementTable::new();
        table.extend(iter);
        table
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for ReplacementTable {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Returns the keys of `old` that no longer exist in `new`.
///
/// Used before committing an edit, to find values that stored data may
/// still reference.
pub fn removed_keys(old: &ReplacementTable, new: &ReplacementTable) -> BTreeSet<String> {
    old.keys()
        .filter(|k| !new.contains_key(k))
        .map(str::to_string)
        .collect()
}
