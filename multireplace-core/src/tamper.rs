// multireplace-core/src/tamper.rs
//! Defines the `Tamper` trait and the types a pipeline hands to it.
//!
//! A tamper plugin receives one value at a time, together with an optional
//! handle on the item the value belongs to, and returns the rewritten value.
//! This module fixes that contract so the pipeline can hold any plugin
//! behind a `Box<dyn Tamper>`.
//!
//! License: MIT OR APACHE 2.0

use crate::config::PluginSettings;
use crate::transform::TransformOutcome;

/// Static metadata describing a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// The item a value was read from.
pub trait TamperableItem {
    /// A stable identifier for the item, used in logs.
    fn item_id(&self) -> &str;
}

/// A minimal item that only carries an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceItem {
    id: String,
}

impl SourceItem {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl TamperableItem for SourceItem {
    fn item_id(&self) -> &str {
        &self.id
    }
}

/// A trait for pluggable value transforms.
pub trait Tamper: Send + Sync {
    fn definition(&self) -> &PluginDefinition;

    /// Returns a reference to the plugin's settings.
    fn settings(&self) -> &PluginSettings;

    /// Transforms `data` and reports what changed.
    ///
    /// Without an `item` there is nothing to tamper with, and `data` comes
    /// back unchanged.
    fn tamper_with_outcome(&self, data: &str, item: Option<&dyn TamperableItem>) -> TransformOutcome;

    /// Transforms `data`, returning only the new value.
    fn tamper(&self, data: &str, item: Option<&dyn TamperableItem>) -> String {
        self.tamper_with_outcome(data, item).output
    }
}
