//! Configuration management for `multireplace-core`.
//!
//! This module defines the persisted plugin settings, the editable form view
//! of those settings, and helpers for loading settings from YAML files.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::allowed_values::{format_table, validate_allowed_value, validate_allowed_values, KeyRule, ValuesInUse};
use crate::errors::ConfigError;
use crate::table::ReplacementTable;
use crate::trim::{parse_trim_amount, TrimMode, TrimSpec};

/// Environment variable naming a settings file to use instead of the
/// default search paths.
pub const SETTINGS_ENV_VAR: &str = "MULTIREPLACE_SETTINGS";

/// Persisted settings of the string replace (multiple) plugin.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PluginSettings {
    /// Source strings and their replacements.
    pub allowed_values: ReplacementTable,
    /// Characters to trim from the left of the probe.
    pub trim_left: Option<usize>,
    /// Characters to trim from the right of the probe.
    pub trim_right: Option<usize>,
    pub trim_mode: TrimMode,
    /// Names an external function that owns the table. While set, the table
    /// cannot be edited through a form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_values_function: Option<String>,
}

/// The editable, all-text view of [`PluginSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsForm {
    pub allowed_values: String,
    pub trim_left: String,
    pub trim_right: String,
    /// Whether stored data already references keys of this table.
    pub field_has_data: bool,
}

impl PluginSettings {
    pub fn trim_spec(&self) -> TrimSpec {
        TrimSpec::new(self.trim_left, self.trim_right).with_mode(self.trim_mode)
    }

    pub fn is_locked(&self) -> bool {
        self.allowed_values_function.is_some()
    }

    /// Renders the current settings for editing.
    pub fn to_form(&self, field_has_data: bool) -> SettingsForm {
        SettingsForm {
            allowed_values: format_table(&self.allowed_values),
            trim_left: self.trim_left.map(|n| n.to_string()).unwrap_or_default(),
            trim_right: self.trim_right.map(|n| n.to_string()).unwrap_or_default(),
            field_has_data,
        }
    }

    /// Validates a submitted form and, if every field passes, applies it.
    ///
    /// Nothing is changed when any field fails. While the table is locked the
    /// submitted text must match the current table.
    pub fn submit_form(&mut self, form: &SettingsForm, rule: KeyRule, usage: &dyn ValuesInUse) -> Result<(), ConfigError> {
        let trim_left = parse_trim_amount("trim_left", &form.trim_left)?;
        let trim_right = parse_trim_amount("trim_right", &form.trim_right)?;

        let allowed_values = match &self.allowed_values_function {
            Some(function) => {
                if form.allowed_values.trim() != format_table(&self.allowed_values) {
                    return Err(ConfigError::AllowedValuesLocked(function.clone()));
                }
                self.allowed_values.clone()
            }
            None => validate_allowed_values(
                &form.allowed_values,
                form.field_has_data,
                &self.allowed_values,
                rule,
                usage,
            )?,
        };

        debug!(
            "Form accepted: {} pair(s), trim_left={:?}, trim_right={:?}.",
            allowed_values.len(),
            trim_left,
            trim_right
        );
        self.allowed_values = allowed_values;
        self.trim_left = trim_left;
        self.trim_right = trim_right;
        Ok(())
    }

    /// Checks settings that came from a file rather than through a form.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Keys must survive a format_table/parse_table round trip.
        for key in self.allowed_values.keys() {
            if let Some(message) = validate_allowed_value(key, KeyRule::BareText) {
                return Err(ConfigError::InvalidAllowedValue(message));
            }
        }
        if self.is_locked() && !self.allowed_values.is_empty() {
            warn!(
                "Settings name allowed values function '{}' but also list {} pair(s).",
                self.allowed_values_function.as_deref().unwrap_or_default(),
                self.allowed_values.len()
            );
        }
        Ok(())
    }

    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading settings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse settings file {}", path.display()))?;
        info!("Loaded {} replacement pair(s) from {}.", settings.allowed_values.len(), path.display());
        Ok(settings)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        // An empty document means "all defaults".
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: PluginSettings = serde_yml::from_str(text).context("Invalid settings YAML")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yml::to_string(self).context("Failed to serialize settings to YAML")
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")
    }
}

/// Default locations searched for a settings file, most specific first.
pub fn settings_candidate_paths() -> Vec<PathBuf> {
    let candidates = vec![
        dirs::home_dir().map(|p| p.join(".multireplace").join("settings.yaml")),
        dirs::config_dir().map(|p| p.join("multireplace").join("settings.yaml")),
        Some(PathBuf::from("./config/settings.yaml")),
    ];
    candidates.into_iter().flatten().collect()
}

/// Resolves and loads settings.
///
/// An explicit path wins, then `MULTIREPLACE_SETTINGS`, then the first
/// existing candidate path. With nothing found the defaults are returned.
pub fn load_settings(explicit: Option<&Path>) -> Result<PluginSettings> {
    if let Some(path) = explicit {
        return PluginSettings::load_from_file(path);
    }

    if let Ok(path) = std::env::var(SETTINGS_ENV_VAR) {
        if !path.trim().is_empty() {
            debug!("Using settings from {}.", SETTINGS_ENV_VAR);
            return PluginSettings::load_from_file(path);
        }
    }

    for candidate in settings_candidate_paths() {
        if candidate.is_file() {
            return PluginSettings::load_from_file(&candidate);
        }
    }

    debug!("No settings file found; using defaults.");
    Ok(PluginSettings::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allowed_values::NoStoredData;

    fn settings_with(pairs: &[(&str, &str)]) -> PluginSettings {
        PluginSettings {
            allowed_values: pairs.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_settings() {
        let settings = PluginSettings::default();
        assert!(settings.allowed_values.is_empty());
        assert_eq!(settings.trim_left, None);
        assert_eq!(settings.trim_right, None);
        assert_eq!(settings.trim_mode, TrimMode::KeepPrefix);
        assert!(!settings.is_locked());
        assert!(settings.trim_spec().is_noop());
    }

    #[test]
    fn test_form_round_trip() {
        let mut settings = settings_with(&[("a", "b"), ("c", "d")]);
        settings.trim_right = Some(5);

        let form = settings.to_form(true);
        assert_eq!(form.allowed_values, "a|b\nc|d");
        assert_eq!(form.trim_left, "");
        assert_eq!(form.trim_right, "5");

        let mut edited = settings.clone();
        edited.submit_form(&form, KeyRule::Explicit, &NoStoredData).unwrap();
        assert_eq!(edited, settings);
    }

    #[test]
    fn test_submit_rejects_bad_trim_without_changes() {
        let mut settings = settings_with(&[("a", "b")]);
        let form = SettingsForm {
            allowed_values: "x|y".to_string(),
            trim_left: "-3".to_string(),
            ..Default::default()
        };
        let err = settings.submit_form(&form, KeyRule::Explicit, &NoStoredData).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTrim { field: "trim_left", .. }));
        assert_eq!(settings.allowed_values.get("a"), Some("b"));
    }

    #[test]
    fn test_locked_table_refuses_edits() {
        let mut settings = settings_with(&[("a", "b")]);
        settings.allowed_values_function = Some("external_values".to_string());

        let mut form = settings.to_form(false);
        form.trim_right = "2".to_string();
        settings.submit_form(&form, KeyRule::Explicit, &NoStoredData).unwrap();
        assert_eq!(settings.trim_right, Some(2));

        form.allowed_values = "a|changed".to_string();
        let err = settings.submit_form(&form, KeyRule::Explicit, &NoStoredData).unwrap_err();
        assert_eq!(err, ConfigError::AllowedValuesLocked("external_values".to_string()));
    }

    #[test]
    fn test_yaml_round_trip() {
        let yaml = "allowed_values:\n  ReplaceMe: Found\n  other: thing\ntrim_left: null\ntrim_right: 5\ntrim_mode: keep_prefix\n";
        let settings = PluginSettings::from_yaml_str(yaml).unwrap();
        assert_eq!(settings.trim_right, Some(5));
        assert_eq!(settings.allowed_values.keys().collect::<Vec<_>>(), vec!["ReplaceMe", "other"]);

        let rendered = settings.to_yaml_string().unwrap();
        assert_eq!(PluginSettings::from_yaml_str(&rendered).unwrap(), settings);
    }

    #[test]
    fn test_negative_trim_in_yaml_is_rejected() {
        assert!(PluginSettings::from_yaml_str("trim_left: -2\n").is_err());
        assert!(PluginSettings::from_yaml_str("trim_right: five\n").is_err());
    }

    #[test]
    fn test_empty_key_in_yaml_is_rejected() {
        assert!(PluginSettings::from_yaml_str("allowed_values:\n  '': nothing\n").is_err());
    }

    #[test]
    fn test_keys_that_cannot_round_trip_are_rejected() {
        for yaml in [
            "allowed_values:\n  'a|b': c\n",
            "allowed_values:\n  ' a ': b\n",
            "allowed_values:\n  \"a\\nb\": c\n",
        ] {
            let err = PluginSettings::from_yaml_str(yaml).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::InvalidAllowedValue(_))),
                "expected {:?} to be rejected, got {:#}",
                yaml,
                err
            );
        }
    }

    #[test]
    fn test_loaded_table_round_trips_through_text() {
        let yaml = "allowed_values:\n  Neo Vim: ' Neovim'\n  nix os: NixOS\n";
        let settings = PluginSettings::from_yaml_str(yaml).unwrap();
        let reparsed = crate::allowed_values::parse_table(&format_table(&settings.allowed_values), true).unwrap();
        assert_eq!(reparsed.keys().collect::<Vec<_>>(), vec!["Neo Vim", "nix os"]);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(PluginSettings::from_yaml_str("").unwrap(), PluginSettings::default());
    }
}
