//! # devstack Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for devstack. The result is a
//! single immutable `Config` value, built once at startup and passed by reference
//! to the docker operations and the menu. Nothing mutates it afterwards.
//!
//! ## Architecture
//!
//! Configuration files are deserialized into *partial* layers (`ConfigFile`),
//! where every field is optional. Layers are merged field-by-field and the result
//! is resolved against the built-in defaults:
//!
//! 1. `--config <PATH>` / `DEVSTACK_CONFIG` (used exclusively when given)
//! 2. Project-specific `.devstack.toml` in current directory or ancestors
//! 3. User-specific `config.toml` in the platform config directory
//! 4. Default values defined in the code
//!
//! After resolving, `~` is expanded in the compose directories and the whole
//! value is validated.
//!
//! ## Examples
//!
//! ```toml
//! shared_network = "shared_network"
//!
//! [app]
//! directory = "./docker"
//! network = "zkSpringbootREST_network"
//! services = ["mysql", "backendApp"]
//!
//! [cicd]
//! directory = "./docker/cicdContainer"
//!
//! [shell]
//! program = "bash"
//! args = ["-c"]
//! ```
//!
use crate::common::fs::io::check_directory;
use crate::core::error::{DevstackError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

const PROJECT_CONFIG_FILENAME: &str = ".devstack.toml";

/// The two compose projects managed by devstack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Project {
    App,
    CiCd,
}

/// Fully resolved, immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub app: ProjectConfig,
    pub cicd: ProjectConfig,
    /// Network shared by both stacks, created by the global docker menu.
    pub shared_network: String,
    pub shell: ShellConfig,
}

/// One compose project: where its definition lives and what it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    pub directory: PathBuf,
    pub network: String,
    /// Services in menu order.
    pub services: Vec<String>,
}

/// Shell used to interpret command strings (`$(...)` substitutions included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Config {
    pub fn project(&self, project: Project) -> &ProjectConfig {
        match project {
            Project::App => &self.app,
            Project::CiCd => &self.cicd,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: ProjectConfig {
                directory: PathBuf::from(default_app_directory()),
                network: default_app_network(),
                services: default_app_services(),
            },
            cicd: ProjectConfig {
                directory: PathBuf::from(default_cicd_directory()),
                network: default_cicd_network(),
                services: default_cicd_services(),
            },
            shared_network: default_shared_network(),
            shell: ShellConfig::default(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        if cfg!(windows) {
            Self {
                program: "powershell".to_string(),
                args: vec!["-Command".to_string()],
            }
        } else {
            Self {
                program: "sh".to_string(),
                args: vec!["-c".to_string()],
            }
        }
    }
}

// --- Partial layers as they appear on disk ---

/// A configuration file. Every field is optional so layers can be merged.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub app: ProjectFile,
    #[serde(default)]
    pub cicd: ProjectFile,
    pub shared_network: Option<String>,
    #[serde(default)]
    pub shell: ShellFile,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProjectFile {
    pub directory: Option<String>,
    pub network: Option<String>,
    pub services: Option<Vec<String>>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ShellFile {
    pub program: Option<String>,
    pub args: Option<Vec<String>>,
}

fn default_app_directory() -> String {
    "./docker".to_string()
}
fn default_app_network() -> String {
    "zkSpringbootREST_network".to_string()
}
fn default_app_services() -> Vec<String> {
    vec!["mysql".to_string(), "backendApp".to_string()]
}
fn default_cicd_directory() -> String {
    "./docker/cicdContainer".to_string()
}
fn default_cicd_network() -> String {
    "ci-cd_network".to_string()
}
fn default_cicd_services() -> Vec<String> {
    vec![
        "jenkins".to_string(),
        "sonarqube".to_string(),
        "postgres".to_string(),
    ]
}
fn default_shared_network() -> String {
    "shared_network".to_string()
}

/// Loads, merges, expands and validates the configuration.
///
/// When `explicit` is given, only that file is read (it must exist); otherwise
/// the user and project files are merged.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let layer = match explicit {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            load_config_from_path(path)?
        }
        None => {
            let user_config = load_user_config()?;
            let project_config = load_project_config()?;
            merge_configs(user_config.unwrap_or_default(), project_config)
        }
    };
    let mut config = resolve(layer);
    expand_config_paths(&mut config);
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<ConfigFile>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "DevStack", "devstack") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<ConfigFile>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file ({PROJECT_CONFIG_FILENAME}) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.devstack.toml`, stopping at the first
/// directory that holds a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: ConfigFile, project: Option<ConfigFile>) -> ConfigFile {
    let project = match project {
        Some(p) => p,
        None => return user,
    };
    ConfigFile {
        app: merge_project(user.app, project.app),
        cicd: merge_project(user.cicd, project.cicd),
        shared_network: project.shared_network.or(user.shared_network),
        shell: ShellFile {
            program: project.shell.program.or(user.shell.program),
            args: project.shell.args.or(user.shell.args),
        },
    }
}

fn merge_project(user: ProjectFile, project: ProjectFile) -> ProjectFile {
    ProjectFile {
        directory: project.directory.or(user.directory),
        network: project.network.or(user.network),
        services: project.services.or(user.services),
    }
}

fn resolve(layer: ConfigFile) -> Config {
    let shell_default = ShellConfig::default();
    Config {
        app: ProjectConfig {
            directory: PathBuf::from(layer.app.directory.unwrap_or_else(default_app_directory)),
            network: layer.app.network.unwrap_or_else(default_app_network),
            services: layer.app.services.unwrap_or_else(default_app_services),
        },
        cicd: ProjectConfig {
            directory: PathBuf::from(
                layer
                    .cicd
                    .directory
                    .unwrap_or_else(default_cicd_directory),
            ),
            network: layer.cicd.network.unwrap_or_else(default_cicd_network),
            services: layer.cicd.services.unwrap_or_else(default_cicd_services),
        },
        shared_network: layer.shared_network.unwrap_or_else(default_shared_network),
        shell: ShellConfig {
            program: layer.shell.program.unwrap_or(shell_default.program),
            args: layer.shell.args.unwrap_or(shell_default.args),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    debug!("Expanding paths in configuration...");
    for project in [&mut config.app, &mut config.cicd] {
        let raw = project.directory.to_string_lossy().into_owned();
        project.directory = PathBuf::from(shellexpand::tilde(&raw).into_owned());
        debug!("Expanded compose directory: {}", project.directory.display());
    }
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if config.shell.program.trim().is_empty() {
        return Err(anyhow!(DevstackError::Config(
            "shell.program cannot be empty.".to_string()
        )));
    }
    if config.shared_network.trim().is_empty() {
        return Err(anyhow!(DevstackError::Config(
            "shared_network cannot be empty.".to_string()
        )));
    }
    for (label, project) in [("app", &config.app), ("cicd", &config.cicd)] {
        validate_project(label, project)?;
    }
    info!("Configuration validation successful.");
    Ok(())
}

fn validate_project(label: &str, project: &ProjectConfig) -> Result<()> {
    if project.directory.as_os_str().is_empty() {
        return Err(anyhow!(DevstackError::Config(format!(
            "{label}.directory cannot be empty."
        ))));
    }
    if !check_directory(&project.directory) {
        warn!(
            "Compose directory '{}' for {} does not exist.",
            project.directory.display(),
            label
        );
    }
    if project.network.trim().is_empty() {
        return Err(anyhow!(DevstackError::Config(format!(
            "{label}.network cannot be empty."
        ))));
    }
    if project.services.is_empty() {
        return Err(anyhow!(DevstackError::Config(format!(
            "{label}.services must list at least one service."
        ))));
    }
    for service in &project.services {
        if service.is_empty() || service.chars().any(char::is_whitespace) {
            return Err(anyhow!(DevstackError::Config(format!(
                "Invalid service name in {label}.services: '{service}'."
            ))));
        }
    }
    Ok(())
}
