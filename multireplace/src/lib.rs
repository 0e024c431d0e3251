// multireplace/src/lib.rs
//! # multireplace CLI
//!
//! Command-line front end for `multireplace-core`. Loads plugin settings,
//! runs the string replace (multiple) transform over piped or file input, and
//! offers helpers to validate and render replacement tables.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
