//! errors.rs - Custom error types for the multireplace-core library.
//!
//! Configuration problems are reported here, at load or submit time. The
//! transform itself is total and never produces one of these.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All configuration errors raised by `multireplace-core`.
///
/// New variants may be added as more settings become editable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    /// Key/value extraction failed: generated and explicit keys were mixed,
    /// or a line could not be keyed at all.
    #[error("Allowed values list: invalid input.")]
    InvalidAllowedValues,

    /// A single key was rejected by the key rule.
    #[error("Allowed values list: {0}")]
    InvalidAllowedValue(String),

    /// An edit would drop keys that stored data still references.
    #[error("Allowed values list: some values are being removed while currently in use: {}", keys.join(", "))]
    ValuesInUse { keys: Vec<String> },

    #[error("{field}: '{value}' is not a non-negative integer.")]
    InvalidTrim { field: &'static str, value: String },

    #[error("The allowed values are determined by the '{0}' function and may not be changed.")]
    AllowedValuesLocked(String),
}
