// multireplace-core/src/plugins/string_replace_multiple.rs
//! A `Tamper` implementation that replaces more than one word or phrase at a
//! time, after optionally trimming the value to find its lookup key.
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::PluginSettings;
use crate::tamper::{PluginDefinition, Tamper, TamperableItem};
use crate::transform::{transform_with_outcome, TransformOutcome};
use crate::trim::TrimSpec;

pub const DEFINITION: PluginDefinition = PluginDefinition {
    id: "string_replace_multiple",
    label: "String Replace (Multiple)",
    description: "Replace more than one word/phrase at a time.",
    category: "Other",
};

#[derive(Debug, Clone)]
pub struct StringReplaceMultiple {
    settings: PluginSettings,
    trim: TrimSpec,
}

impl StringReplaceMultiple {
    pub fn new(settings: PluginSettings) -> Self {
        let trim = settings.trim_spec();
        debug!(
            "Plugin '{}' configured with {} pair(s), trim {:?}.",
            DEFINITION.id,
            settings.allowed_values.len(),
            trim
        );
        Self { settings, trim }
    }
}

impl Default for StringReplaceMultiple {
    fn default() -> Self {
        Self::new(PluginSettings::default())
    }
}

impl Tamper for StringReplaceMultiple {
    fn definition(&self) -> &PluginDefinition {
        &DEFINITION
    }

    fn settings(&self) -> &PluginSettings {
        &self.settings
    }

    fn tamper_with_outcome(&self, data: &str, item: Option<&dyn TamperableItem>) -> TransformOutcome {
        let Some(item) = item else {
            return TransformOutcome::unchanged(data);
        };

        let outcome = transform_with_outcome(data, &self.settings.allowed_values, &self.trim);
        if let Some(key) = &outcome.matched_key {
            debug!("Item '{}': replaced '{}' {} time(s).", item.item_id(), key, outcome.replacements);
        }
        outcome
    }
}
