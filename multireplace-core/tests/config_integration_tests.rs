// multireplace-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;
use test_log::test;

use multireplace_core::config::{self, PluginSettings};
use multireplace_core::{StringReplaceMultiple, SourceItem, Tamper, TrimMode};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r#"
allowed_values:
  ReplaceMe: Found
  hyper land: Hyprland
trim_right: 5
"#;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;

    let settings = PluginSettings::load_from_file(file.path())?;
    assert_eq!(settings.allowed_values.len(), 2);
    assert_eq!(settings.allowed_values.get("hyper land"), Some("Hyprland"));
    assert_eq!(settings.trim_right, Some(5));
    assert_eq!(settings.trim_left, None);
    assert_eq!(settings.trim_mode, TrimMode::KeepPrefix);
    Ok(())
}

#[test]
fn test_load_settings_prefers_explicit_path() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"allowed_values:\n  a: b\ntrim_mode: drop_prefix\ntrim_left: 2\n")?;

    let settings = config::load_settings(Some(file.path()))?;
    assert_eq!(settings.trim_mode, TrimMode::DropPrefix);

    let plugin = StringReplaceMultiple::new(settings);
    let item = SourceItem::new("file");
    assert_eq!(plugin.tamper("xxa", Some(&item)), "xxb");
    Ok(())
}

#[test]
fn test_load_from_missing_file_fails() {
    let err = PluginSettings::load_from_file("/definitely/not/here/settings.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read settings file"));
}

#[test]
fn test_load_from_malformed_file_fails() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"allowed_values: [not, a, mapping]\n")?;
    let err = PluginSettings::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse settings file"));
    Ok(())
}

#[test]
fn test_candidate_paths_end_with_local_config() {
    let paths = config::settings_candidate_paths();
    assert!(!paths.is_empty());
    assert!(paths.last().unwrap().ends_with("config/settings.yaml"));
}

#[test]
fn test_load_rejects_keys_that_change_when_reparsed() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"allowed_values:\n  ' padded ': x\n  'a|b': c\n")?;

    let err = PluginSettings::load_from_file(file.path()).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("Failed to parse settings file"));
    assert!(message.contains("may not start or end with whitespace"));
    Ok(())
}
