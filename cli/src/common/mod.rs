//! # devstack Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared, domain-agnostic building blocks used by the command modules:
//!
//! - `fs`: Line-oriented file helpers and directory checks.
//! - `process`: Running external command lines and reporting their outcome.
//! - `ui`: ANSI styling, fixed log-line formats, and menu input.
//!

/// Utilities for filesystem operations (line I/O, directory checks).
pub mod fs;
/// Utilities for executing external command lines through a shell.
pub mod process;
/// Utilities for terminal presentation and input.
pub mod ui;
