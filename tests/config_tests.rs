//! Integration tests for configuration management

use hlaqh_progress::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.exports_dir.is_empty(),
        "Default exports_dir should not be empty"
    );
    assert!(
        !config.paths.reports_dir.is_empty(),
        "Default reports_dir should not be empty"
    );
    assert_eq!(config.report.format, "html");
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[paths]
exports_dir = "./exports"
reports_dir = "./reports"

[report]
format = "markdown"
title = "Halaqa Weekly"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.exports_dir, "./exports");
    assert_eq!(config.paths.reports_dir, "./reports");
    assert_eq!(config.report.format, "markdown");
    assert_eq!(config.report.title, "Halaqa Weekly");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and fields fall back to serde defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.paths.exports_dir, "");
    assert_eq!(config.report.title, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$HLAQH/test.log"

[paths]
exports_dir = "$HLAQH/exports"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("hlaqh"));
    assert!(!config.logging.file.contains("$HLAQH"));
    assert!(config.paths.exports_dir.ends_with("exports"));
    assert!(!config.paths.exports_dir.contains("$HLAQH"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert_eq!(config.get("verbose").unwrap(), "true");
    assert!(config.logging.verbose);
    assert!(config.set("verbose", "maybe").is_err());

    config
        .set("exports-dir", "/srv/exports")
        .expect("Failed to set exports dir");
    assert_eq!(config.get("exports_dir").unwrap(), "/srv/exports");

    config.set("title", "Term 2").expect("Failed to set title");
    assert_eq!(config.get("title").unwrap(), "Term 2");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config.set("format", "json").expect("Failed to set format");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("format", &defaults)
        .expect("Failed to unset format");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.report.format, defaults.report.format);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("format", "md").expect("Failed to set format");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.report.format, "markdown");
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        exports_dir: Some("./custom_exports".to_string()),
        reports_dir: Some("./custom_reports".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.paths.exports_dir, "./custom_exports");
    assert_eq!(config.paths.reports_dir, "./custom_reports");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let reports_dir = config.paths.reports_dir.clone();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.reports_dir, reports_dir);
}

#[test]
fn test_config_display_format() {
    let display_str = Config::from_defaults().to_string();

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[paths]"));
    assert!(display_str.contains("[report]"));
    assert!(display_str.contains("exports_dir"));
    assert!(display_str.contains("title"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"

[paths]
exports_dir = ""
reports_dir = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    assert!(config.merge_defaults(&defaults));
    assert_eq!(config.paths.exports_dir, defaults.paths.exports_dir);
    assert_eq!(config.report.title, defaults.report.title);
    // A second merge has nothing left to fill
    assert!(!config.merge_defaults(&defaults));
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"

[report]
title = "Halaqa Weekly"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    config.merge_defaults(&Config::from_defaults());

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.report.title, "Halaqa Weekly");
}

#[test]
fn test_get_hlaqh_dir() {
    let dir = Config::get_hlaqh_dir();

    assert!(dir.ends_with("hlaqh"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
    assert!(path.starts_with(Config::get_hlaqh_dir()));
}
