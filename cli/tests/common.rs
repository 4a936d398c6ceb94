//! # devstack CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files. Each `.rs` file in this
//! directory is compiled as its own test crate and pulls this module in with
//! `mod common;`.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// # Get devstack Command (`devstack_cmd`)
///
/// Creates an `assert_cmd::Command` for the compiled `devstack` binary.
///
/// ## Panics
/// Panics if the `devstack` binary cannot be found via `Command::cargo_bin`.
pub fn devstack_cmd() -> Command {
    Command::cargo_bin("devstack").expect("Failed to find devstack binary for testing")
}

/// Writes `content` as a configuration file in a fresh temporary directory.
///
/// Tests pass the returned path with `--config` so user and project
/// configuration on the host never leak in. Keep the `TempDir` alive for the
/// duration of the test.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("devstack.toml");
    std::fs::write(&path, content).expect("Failed to write temp config");
    (dir, path)
}

/// `devstack --dry-run --config <empty config>` running in the config's directory.
pub fn dry_run_session() -> (TempDir, Command) {
    let (dir, path) = temp_config("");
    let mut cmd = devstack_cmd();
    cmd.current_dir(dir.path())
        .arg("--dry-run")
        .arg("--config")
        .arg(&path)
        .env_remove("RUST_LOG");
    (dir, cmd)
}
