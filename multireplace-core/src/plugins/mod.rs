// multireplace-core/src/plugins/mod.rs
//! Concrete implementations of the `Tamper` trait.
//!
//! Each plugin lives in its own file and is declared here.

pub mod string_replace_multiple;
