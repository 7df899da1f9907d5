//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder defaults and explicit setters.
//! - Test config file loading.
//! - Test environment variable handling and precedence.
//! - Test validation of merged values.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

pub mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
