//! # devstack Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout devstack. Two failure
//! tiers exist in the application:
//!
//! - **Swallowed**: failures of external commands. These are reported by the
//!   command runner (`common::process`) as an `ExecutionResult` and a styled
//!   `ERROR!` line, and never reach the `Result` channel.
//! - **Propagated**: configuration and filesystem failures. These travel up as
//!   `anyhow::Error`, usually wrapping a `DevstackError` plus context.
//!
//! ## Architecture
//!
//! - `DevstackError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! ## Examples
//!
//! ```rust
//! // Return a specific error type
//! if config.app.services.is_empty() {
//!     anyhow::bail!(DevstackError::Config("app.services cannot be empty".into()));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the devstack application.
#[derive(Error, Debug)]
pub enum DevstackError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("External command failed: {cmd}, Status: {status}")]
    ExternalCommand { cmd: String, status: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = DevstackError::Config("app.directory cannot be empty".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: app.directory cannot be empty"
        );

        let fs_err = DevstackError::FileSystem("Path is not a file".into());
        assert_eq!(fs_err.to_string(), "Filesystem error: Path is not a file");

        let cmd_err = DevstackError::ExternalCommand {
            cmd: "docker system prune -a -f".into(),
            status: "exit status: 1".into(),
        };
        assert_eq!(
            cmd_err.to_string(),
            "External command failed: docker system prune -a -f, Status: exit status: 1"
        );
    }

    #[test]
    fn test_error_downcast_through_anyhow() {
        let err: anyhow::Error = DevstackError::Config("bad".into()).into();
        assert!(err
            .downcast_ref::<DevstackError>()
            .is_some_and(|de| matches!(de, DevstackError::Config(_))));
    }
}
