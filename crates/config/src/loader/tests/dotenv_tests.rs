//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that invalid `.env` files return errors without leaking contents.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` and `#[serial]` to prevent cross-test contamination.
//! - Tests must serialize mutations to process-global state (cwd/env).

use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_valid_dotenv_sets_variables() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "PARLEY_DOTENV_PROBE=from-dotenv\n").unwrap();

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("PARLEY_DOTENV_PROBE", None),
        ],
        || {
            ConfigLoader::new().load_dotenv().unwrap();
            assert_eq!(
                std::env::var("PARLEY_DOTENV_PROBE").ok().as_deref(),
                Some("from-dotenv")
            );
        },
    );
}

#[test]
#[serial]
fn test_invalid_dotenv_does_not_leak_contents() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(
        temp_dir.path().join(".env"),
        "PARLEY_THEME=light\nthis line is secret-value and invalid\n",
    )
    .unwrap();

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let err = ConfigLoader::new().load_dotenv().unwrap_err();
        assert!(matches!(err, ConfigError::DotenvParse { .. }));
        assert!(!err.to_string().contains("secret-value"));
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_invalid_file() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);
    fs::write(temp_dir.path().join(".env"), "not valid at all\n").unwrap();

    for value in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(value), || {
            assert!(ConfigLoader::new().load_dotenv().is_ok());
        });
    }
}
