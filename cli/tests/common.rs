//! # TArchiver CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test runs
//! the compiled `tarchiver` binary inside its own temporary directory, with
//! the user configuration directory pointed at that directory too, so a
//! developer's own `config.toml` never leaks into the results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// # Get TArchiver Command (`tarchiver_cmd`)
///
/// ## Panics
/// Panics if the `tarchiver` binary cannot be found via `Command::cargo_bin`.
pub fn tarchiver_cmd() -> Command {
    Command::cargo_bin("tarchiver").expect("Failed to find tarchiver binary for testing")
}

/// A `tarchiver` command running in `dir` with an isolated config directory.
pub fn tarchiver_in(dir: &Path) -> Command {
    let mut cmd = tarchiver_cmd();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("TARCHIVER_TIMEOUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Whether an external tool is installed. Tests that need a real tool skip
/// themselves when it is missing.
pub fn tool_available(name: &str) -> bool {
    std::process::Command::new(name)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
