//! # devstack Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the two layers that sit on top of `common`:
//!
//! - `docker`: The catalog of docker / docker compose operations. Each one
//!   formats its command lines and hands them to a `CommandRunner`.
//! - `menu`: The interactive state machine that maps numeric choices to
//!   docker operations.
//!
//! Control flows menu → docker operations → command runner → external process.
//!

/// Docker operations (start/stop/prune/build/compose and their composites).
pub mod docker;
/// Interactive menu state machine.
pub mod menu;
