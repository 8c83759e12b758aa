//! Integration tests for TreeConfig loading and engine construction.
//!
//! These tests run without a global config, so they test explicit config
//! files merged onto compiled defaults.

use std::fs;

use tempfile::TempDir;

use fasttree::util::testing::category_records;
use fasttree::{OptionList, TreeConfig, TreeEngine, TreeError};

#[test]
fn given_no_config_file_when_load_then_uses_defaults() {
    let config = TreeConfig::load(None).expect("load defaults");
    assert_eq!(config, TreeConfig::default());
}

#[test]
fn given_partial_config_file_when_load_then_overrides_only_specified_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fasttree.toml");
    fs::write(
        &path,
        r#"
nbsp = "  "

[icons]
corner = "`"
"#,
    )
    .unwrap();

    let config = TreeConfig::load(Some(&path)).expect("load config");

    assert_eq!(config.pid_name, "pid");
    assert_eq!(config.nbsp, "  ");
    assert_eq!(config.icons.corner, "`");
    assert_eq!(config.icons.branch, "├");
}

#[test]
fn given_empty_pid_name_in_file_when_load_then_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fasttree.toml");
    fs::write(&path, "pid_name = \"\"\n").unwrap();

    let err = TreeConfig::load(Some(&path)).unwrap_err();
    assert!(matches!(err, TreeError::InvalidConfig { .. }));
}

#[test]
fn given_malformed_file_when_load_then_invalid_config_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "pid_name = [").unwrap();

    let err = TreeConfig::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn given_missing_explicit_file_when_load_then_error() {
    let dir = TempDir::new().unwrap();
    let result = TreeConfig::load(Some(&dir.path().join("absent.toml")));
    assert!(result.is_err());
}

#[test]
fn given_loaded_config_when_building_engine_then_rendering_uses_it() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fasttree.toml");
    fs::write(&path, "nbsp = \".\"\n[icons]\nbranch = \"+\"\ncorner = \"-\"\n").unwrap();
    let config = TreeConfig::load(Some(&path)).unwrap();

    let engine = TreeEngine::with_config(category_records(), config).unwrap();
    let out = engine
        .option_list(1, &OptionList::new("@spacer@name ").prefix("."))
        .unwrap();
    assert_eq!(out, ".+Phones .│.+Android .│.-iOS .-Laptops ");
}
