//! # devstack Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Groups filesystem helpers. Currently only line-oriented I/O lives here.

/// Contains line-based file I/O (`read_lines`, `write_lines`, `insert_line`) and `check_directory`.
pub mod io;
