//! # devstack Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the devstack CLI. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading the configuration once and handing it to the menu
//! - Mapping the menu outcome to the process exit status
//!
//! ## Examples
//!
//! ```bash
//! # Start the interactive menu
//! devstack
//!
//! # Print the commands a choice would run, without running them
//! devstack --dry-run
//!
//! # Use a specific configuration file and more logging
//! devstack -vv --config ./stack.toml
//! ```
//!
//! Processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (defaults, user file, project file or `--config`)
//! 4. Run the interactive menu on stdin/stdout
//! 5. Exit 0 after an action, or print the farewell and exit 1 on an
//!    unrecognized main-menu choice
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Docker operations and the interactive menu
mod common; // Shared utilities (process, fs, ui)
mod core; // Core infrastructure (errors, config)

use commands::menu::{Menu, MenuOutcome};
use common::process::{CommandRunner, DryRunRunner, ShellRunner};

/// Defines the command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "devstack",
    about = "Interactive menu for a local app + CI/CD docker compose environment",
    long_about = "Presents numbered menus for the application stack, the CI/CD stack and\n\
                  global docker maintenance, and runs the matching docker / docker compose\n\
                  commands in the configured project directories.",
    version
)]
struct Cli {
    /// Configuration file to use instead of the user and project files.
    #[arg(long, env = "DEVSTACK_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
    /// Print the commands instead of executing them.
    #[arg(long)]
    dry_run: bool,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let config = match core::config::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration loading failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let shell_runner;
    let runner: &dyn CommandRunner = if cli.dry_run {
        &DryRunRunner
    } else {
        shell_runner = ShellRunner::new(config.shell.clone());
        &shell_runner
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = Menu::new(&config, runner).run(&mut stdin.lock(), &mut stdout.lock());

    match outcome {
        Ok(MenuOutcome::Completed) => Ok(()),
        Ok(MenuOutcome::Exited) => {
            eprintln!("{}", common::ui::farewell());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Menu session failed: {:?}", e);
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["devstack", "--dry-run", "-vv", "--config", "x.toml"]).unwrap();
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }
}
