//! Integration tests for configuration loading through the public API.
//!
//! These tests verify end-to-end config loading behavior, ensuring that
//! the ConfigLoader builder chain works the way the binary drives it.

use parley_config::{ColorTheme, ConfigError, ConfigLoader, Theme, env_var_or_none};
use std::fs;
use tempfile::TempDir;

/// Full chain as used by the binary: file, then explicit CLI overrides.
#[test]
fn test_config_loader_cli_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"{"layout": {"vertical_ratio": 0.5, "horizontal_ratio": 0.4}}"#,
    )
    .unwrap();

    let mut loader = ConfigLoader::new()
        .with_config_path(config_path)
        .from_file()
        .expect("file should load");
    loader.set_horizontal_ratio(Some(0.2));

    let config = loader.build().expect("should build with CLI overrides");
    assert_eq!(config.layout.vertical_ratio, 0.5);
    assert_eq!(config.layout.horizontal_ratio, 0.2);
}

/// Test that env_var_or_none is exported from the crate root.
#[test]
fn test_env_var_or_none_exported() {
    let _result: Option<String> = env_var_or_none("PARLEY_THEME");
}

#[test]
fn test_invalid_file_ratio_fails_at_build() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    fs::write(&config_path, r#"{"layout": {"vertical_ratio": 1.0}}"#).unwrap();

    let err = ConfigLoader::new()
        .with_config_path(config_path)
        .from_file()
        .unwrap()
        .build()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_color_theme_expands_to_runtime_theme() {
    assert_eq!(ColorTheme::Default.to_theme(), Theme::default());
    assert_ne!(ColorTheme::Light.to_theme(), ColorTheme::Monochrome.to_theme());
}
