// multireplace/tests/integration_line_buffered.rs
//! Integration tests for `apply --line-buffered`, where every input line is
//! its own value.

use assert_cmd::Command;
use assert_cmd::assert::Assert;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

/// Writes a pairs file with two entries.
fn create_pairs_file(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("pairs.txt");
    fs::write(&path, "ReplaceMe 2021|Found 2021\nneovim|Neovim\n").unwrap();
    path
}

fn run_line_buffered(dir: &tempfile::TempDir, input: &str, global_args: &[&str], extra: &[&str]) -> Assert {
    let pairs = create_pairs_file(dir);
    let mut cmd = Command::new(assert_cmd::cargo_bin!("multireplace"));
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("MULTIREPLACE_SETTINGS")
        .args(global_args)
        .arg("apply")
        .arg("--line-buffered")
        .arg("--pairs")
        .arg(&pairs)
        .args(extra);
    cmd.write_stdin(input).assert()
}

#[test]
fn test_each_line_is_matched_on_its_own() {
    let dir = tempdir().unwrap();
    run_line_buffered(&dir, "ReplaceMe 2021\nneovim\nneovim rocks\n", &["-q"], &[])
        .success()
        .stdout("Found 2021\nNeovim\nneovim rocks\n");
}

#[test]
fn test_line_endings_are_preserved() {
    let dir = tempdir().unwrap();
    run_line_buffered(&dir, "neovim\r\nother\r\nneovim", &["-q"], &[])
        .success()
        .stdout("Neovim\r\nother\r\nNeovim");
}

#[test]
fn test_trim_applies_per_line() {
    let dir = tempdir().unwrap();
    run_line_buffered(&dir, "neovim.conf\nneovim\n", &["-q"], &["--trim-right", "5"])
        .success()
        .stdout("Neovim.conf\nneovim\n");
}

#[test]
fn test_summary_counts_lines() {
    let dir = tempdir().unwrap();
    run_line_buffered(&dir, "neovim\nvim\nneovim\n", &[], &[])
        .success()
        .stderr(predicate::str::contains("Replacement summary: 2 of 3 value(s) changed."))
        .stderr(predicate::str::contains("neovim: 2 occurrence(s)"));
}

#[test]
fn test_line_buffered_conflicts_with_diff() {
    let dir = tempdir().unwrap();
    run_line_buffered(&dir, "neovim\n", &[], &["--diff"])
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
