//! # devstack Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs external command lines (docker, docker compose) and reports the outcome.
//! Execution is **best-effort**: a failing command never aborts the caller. The
//! runner prints one styled result line and hands back an `ExecutionResult`
//! that callers may inspect but are free to ignore.
//!
//! ## Architecture
//!
//! - `CommandRunner`: The seam between docker operations and process spawning.
//! - `ShellRunner`: Spawns the configured shell (`sh -c` / `powershell -Command`)
//!   with the command string as its last argument, blocking until it exits.
//!   Going through a shell lets command strings keep `$(docker ps -aq)` style
//!   substitutions verbatim.
//! - `DryRunRunner`: Prints what would run and reports success without spawning.
//! - `ExecutionResult`: Command, directory, outcome and captured output.
//!
//! No existence check is made on the working directory; a missing directory
//! surfaces as a spawn failure.
//!
use crate::common::ui;
use crate::core::config::ShellConfig;
use crate::core::error::DevstackError;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info, warn};

/// How an external command ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The process ran to completion. `None` when terminated by a signal.
    Exited(Option<i32>),
    /// The process could not be started at all.
    SpawnFailed(String),
    /// Nothing was spawned (`--dry-run`).
    Skipped,
}

/// Result of one best-effort command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub command: String,
    pub directory: Option<PathBuf>,
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn success(&self) -> bool {
        matches!(self.outcome, Outcome::Exited(Some(0)) | Outcome::Skipped)
    }

    /// Human-readable failure summary, `None` on success.
    pub fn error_summary(&self) -> Option<String> {
        let status = match &self.outcome {
            Outcome::Exited(Some(0)) | Outcome::Skipped => return None,
            Outcome::Exited(Some(code)) => format!("exit status: {code}"),
            Outcome::Exited(None) => "terminated by signal".to_string(),
            Outcome::SpawnFailed(reason) => format!("could not start: {reason}"),
        };
        Some(
            DevstackError::ExternalCommand {
                cmd: self.command.clone(),
                status,
            }
            .to_string(),
        )
    }

    /// Prints the styled success or `ERROR!` line followed by captured output.
    pub fn report(&self) {
        match self.error_summary() {
            None => {
                println!("{}", ui::command_success(&self.command));
                if !self.stdout.is_empty() {
                    println!("{}", self.stdout.trim_end());
                }
            }
            Some(summary) => {
                println!("{}", ui::log_error(&summary));
                if !self.stderr.is_empty() {
                    println!("{}", self.stderr.trim_end());
                }
            }
        }
    }
}

/// Executes command strings on behalf of the docker operations.
pub trait CommandRunner {
    /// Runs `command`, in `dir` when given, and reports the outcome.
    fn run(&self, command: &str, dir: Option<&Path>) -> ExecutionResult;
}

/// Runs commands through the configured shell.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: ShellConfig,
}

impl ShellRunner {
    pub fn new(shell: ShellConfig) -> Self {
        Self { shell }
    }

    fn build_command(&self, command: &str, dir: Option<&Path>) -> Command {
        let mut process = Command::new(&self.shell.program);
        process.args(&self.shell.args).arg(command);
        if let Some(dir) = dir {
            process.current_dir(dir);
        }
        process
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, dir: Option<&Path>) -> ExecutionResult {
        debug!(
            "Running via {} {:?}: {} (dir: {:?})",
            self.shell.program, self.shell.args, command, dir
        );
        let result = match self.build_command(command, dir).output() {
            Ok(output) => ExecutionResult {
                command: command.to_string(),
                directory: dir.map(Path::to_path_buf),
                outcome: Outcome::Exited(output.status.code()),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            },
            Err(e) => ExecutionResult {
                command: command.to_string(),
                directory: dir.map(Path::to_path_buf),
                outcome: Outcome::SpawnFailed(e.to_string()),
                stdout: String::new(),
                stderr: String::new(),
            },
        };
        if result.success() {
            info!("Command succeeded: {}", command);
            if !result.stderr.is_empty() {
                debug!("stderr of '{}':\n{}", command, result.stderr.trim_end());
            }
        } else {
            warn!(
                "Command failed: {} (dir: {:?}, outcome: {:?})",
                command, result.directory, result.outcome
            );
        }
        result.report();
        result
    }
}

/// Prints commands instead of running them.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, command: &str, dir: Option<&Path>) -> ExecutionResult {
        match dir {
            Some(dir) => println!("[dry-run] ({}) {}", dir.display(), command),
            None => println!("[dry-run] {}", command),
        }
        ExecutionResult {
            command: command.to_string(),
            directory: dir.map(Path::to_path_buf),
            outcome: Outcome::Skipped,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_error_summary() {
        let mut result = ExecutionResult {
            command: "docker network create shared_network".into(),
            directory: None,
            outcome: Outcome::Exited(Some(0)),
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(result.success());
        assert_eq!(result.error_summary(), None);

        result.outcome = Outcome::Exited(Some(1));
        assert!(!result.success());
        assert_eq!(
            result.error_summary().unwrap(),
            "External command failed: docker network create shared_network, Status: exit status: 1"
        );

        result.outcome = Outcome::SpawnFailed("No such file or directory".into());
        assert!(result
            .error_summary()
            .unwrap()
            .contains("could not start: No such file or directory"));
    }

    #[test]
    fn test_dry_run_never_fails() {
        let result = DryRunRunner.run("docker compose up -d", Some(Path::new("./docker")));
        assert!(result.success());
        assert_eq!(result.outcome, Outcome::Skipped);
        assert_eq!(result.directory, Some(PathBuf::from("./docker")));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_runner_captures_output_in_directory() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let runner = ShellRunner::new(ShellConfig::default());

        let result = runner.run("ls && echo done", Some(dir.path()));
        assert!(result.success());
        assert!(result.stdout.contains("marker.txt"));
        assert!(result.stdout.contains("done"));
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_runner_reports_non_zero_exit() {
        let runner = ShellRunner::new(ShellConfig::default());
        let result = runner.run("echo oops >&2; exit 3", None);
        assert_eq!(result.outcome, Outcome::Exited(Some(3)));
        assert_eq!(result.stderr.trim(), "oops");
        assert!(!result.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_runner_missing_directory_is_spawn_failure() {
        let dir = tempdir().unwrap();
        let runner = ShellRunner::new(ShellConfig::default());
        let result = runner.run("true", Some(&dir.path().join("absent")));
        assert!(matches!(result.outcome, Outcome::SpawnFailed(_)));
    }

    #[test]
    fn test_missing_shell_program_is_spawn_failure() {
        let runner = ShellRunner::new(ShellConfig {
            program: "devstack-no-such-shell".into(),
            args: vec![],
        });
        let result = runner.run("docker ps", None);
        assert!(matches!(result.outcome, Outcome::SpawnFailed(_)));
        assert!(result.error_summary().is_some());
    }
}
