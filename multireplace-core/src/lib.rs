// multireplace-core/src/lib.rs
//! # multireplace Core Library
//!
//! `multireplace-core` provides the platform-independent logic of the string
//! replace (multiple) transform: a value is optionally trimmed, the trimmed
//! value is looked up as an exact key in a replacement table, and on a match
//! every occurrence of that key in the *untrimmed* value is replaced.
//!
//! The library is pure and stateless. Settings are built once and shared
//! across calls; the transform itself does no I/O and never fails.
//!
//! ## Modules
//!
//! * `table`: The insertion-ordered `ReplacementTable` and `removed_keys`.
//! * `trim`: `TrimSpec`, `TrimMode`, and parsing of trim amounts.
//! * `transform`: The trim-then-match replacement.
//! * `allowed_values`: Parsing, rendering and validation of the `key|value` text.
//! * `config`: Persisted `PluginSettings`, the editable `SettingsForm`, and loading.
//! * `tamper`: The `Tamper` trait seam and the item handle passed to it.
//! * `plugins`: Concrete `Tamper` implementations.
//! * `headless`: Helpers for running a plugin over raw input, line endings intact.
//! * `errors`: The `ConfigError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use multireplace_core::{parse_table, PluginSettings, StringReplaceMultiple, SourceItem, Tamper};
//!
//! let settings = PluginSettings {
//!     allowed_values: parse_table("ReplaceMe|Found", true).unwrap(),
//!     trim_right: Some(5),
//!     ..Default::default()
//! };
//! let plugin = StringReplaceMultiple::new(settings);
//! let item = SourceItem::new("row-1");
//!
//! assert_eq!(plugin.tamper("ReplaceMe 2021", Some(&item)), "Found 2021");
//! // No item, nothing to tamper with.
//! assert_eq!(plugin.tamper("ReplaceMe 2021", None), "ReplaceMe 2021");
//! ```
//!
//! ## Error Handling
//!
//! Configuration problems surface as [`ConfigError`]; file loading returns
//! `anyhow::Result` with context. The transform has no error path.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod allowed_values;
pub mod config;
pub mod errors;
pub mod headless;
pub mod plugins;
pub mod table;
pub mod tamper;
pub mod transform;
pub mod trim;

/// Re-exports the table type and key diffing.
pub use table::{removed_keys, ReplacementTable};

/// Re-exports trim settings.
pub use trim::{parse_trim_amount, TrimMode, TrimSpec};

pub use transform::{transform, transform_with_outcome, TransformOutcome};

/// Re-exports the allowed values text format and its validation.
pub use allowed_values::{
    format_table,
    parse_table,
    parse_table_with,
    validate_allowed_value,
    validate_allowed_values,
    KeyRule,
    NoStoredData,
    ValuesInUse,
};

pub use config::{load_settings, settings_candidate_paths, PluginSettings, SettingsForm, SETTINGS_ENV_VAR};

pub use errors::ConfigError;

/// Re-exports the plugin trait seam and the bundled plugin.
pub use tamper::{PluginDefinition, SourceItem, Tamper, TamperableItem};
pub use plugins::string_replace_multiple::StringReplaceMultiple;

pub use headless::{headless_tamper_line, headless_tamper_whole, split_line_ending};
