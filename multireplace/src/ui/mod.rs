// multireplace/src/ui/mod.rs
//! Terminal output helpers: coloured messages, the run summary and diffs.

pub mod diff_viewer;
pub mod output_format;
