//! # devstack Docker Operations
//!
//! File: cli/src/commands/docker/mod.rs
//!
//! ## Overview
//!
//! The fixed catalog of operations the menus can trigger. Every operation is a
//! formatter plus dispatcher: it builds one or more command lines from the
//! configuration and its parameters, prints a header, and hands each line to the
//! `CommandRunner` in order.
//!
//! ## Failure semantics
//!
//! Operations never abort. The runner reports each failure and the operation
//! moves on to its next command; composites move on to their next step. All
//! results are returned so callers can look at them, but nothing requires it.
//!
//! ## Composites
//!
//! - `reset_rebuild_everything`: stop all → system prune → volume prune →
//!   create shared network → build app → build CI/CD
//! - `reset_everything`: stop all → system prune → volume prune
//! - `reset_rebuild_compose`: compose down (with volumes) → image prune → build
//! - `rebuild_service`: remove container (stop + force) → build → start, so the
//!   container is recreated from the fresh image
//!
pub mod command_lines;

use crate::common::process::{CommandRunner, ExecutionResult};
use crate::common::ui;
use crate::core::config::{Config, Project};
use std::path::Path;
use tracing::info;

/// Name of the CI/CD service whose initial admin password is shown after a rebuild.
pub const JENKINS_SERVICE: &str = "jenkins";

/// Results of the commands an operation ran, in execution order.
pub type Report = Vec<ExecutionResult>;

/// Docker operations bound to one configuration and one runner.
pub struct DockerOps<'a> {
    config: &'a Config,
    runner: &'a dyn CommandRunner,
}

impl<'a> DockerOps<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &'a Config {
        self.config
    }

    fn run(&self, command: &str) -> ExecutionResult {
        self.runner.run(command, None)
    }

    fn run_in(&self, command: &str, dir: &Path) -> ExecutionResult {
        self.runner.run(command, Some(dir))
    }

    pub fn start_all(&self) -> Report {
        println!("{}", ui::header("Starting all containers..."));
        vec![self.run(command_lines::START_ALL_CONTAINERS)]
    }

    pub fn stop_all(&self) -> Report {
        println!("{}", ui::header("Stopping all containers..."));
        vec![self.run(command_lines::STOP_ALL_CONTAINERS)]
    }

    pub fn system_prune(&self) -> Report {
        println!("{}", ui::header("Pruning system..."));
        vec![self.run(command_lines::SYSTEM_PRUNE)]
    }

    pub fn volume_prune(&self) -> Report {
        println!("{}", ui::header("Pruning volumes..."));
        vec![self.run(command_lines::VOLUME_PRUNE)]
    }

    pub fn delete_images(&self) -> Report {
        println!("{}", ui::header("Removing images..."));
        vec![self.run(command_lines::DELETE_ALL_IMAGES)]
    }

    pub fn create_network(&self, name: &str) -> Report {
        println!("{}", ui::header(&format!("Creating {name} docker network...")));
        vec![self.run(&command_lines::network_create(name))]
    }

    /// `docker compose up -d --build` in the project directory.
    pub fn build(&self, dir: &Path) -> Report {
        println!("{}", ui::header("Composing and building..."));
        vec![self.run_in(command_lines::COMPOSE_UP_BUILD, dir)]
    }

    pub fn compose_up(&self, dir: &Path) -> Report {
        println!("{}", ui::header("Composing up..."));
        vec![self.run_in(command_lines::COMPOSE_UP, dir)]
    }

    pub fn start_service(&self, service: &str, dir: &Path) -> Report {
        println!("{}", ui::header(&format!("Starting service {service}...")));
        vec![self.run_in(&command_lines::compose_up_service(service), dir)]
    }

    pub fn stop_service(&self, service: &str, dir: &Path) -> Report {
        println!("{}", ui::header(&format!("Stopping service {service}...")));
        vec![self.run_in(&command_lines::compose_stop_service(service), dir)]
    }

    /// Stops each service in turn.
    pub fn stop_services(&self, services: &[String], dir: &Path) -> Report {
        services
            .iter()
            .flat_map(|service| self.stop_service(service, dir))
            .collect()
    }

    pub fn rebuild_service(&self, service: &str, dir: &Path) -> Report {
        println!("{}", ui::header(&format!("Rebuilding {service}...")));
        vec![
            self.run_in(&command_lines::compose_rm_service(service), dir),
            self.run_in(&command_lines::compose_build_service(service), dir),
            self.run_in(&command_lines::compose_up_service(service), dir),
        ]
    }

    /// Prints the generated Jenkins admin password from the running container.
    pub fn show_jenkins_password(&self, dir: &Path) -> Report {
        println!(
            "{}:",
            ui::stylize(
                ui::Weight::Regular,
                colored::Color::Yellow,
                "HERE IS YOUR INITIAL JENKINS PASSWORD"
            )
        );
        vec![self.run_in(
            &command_lines::compose_exec_cat(JENKINS_SERVICE, command_lines::JENKINS_PASSWORD_FILE),
            dir,
        )]
    }

    pub fn reset_rebuild_everything(&self) -> Report {
        info!("Resetting and rebuilding both compose projects");
        let mut report = self.reset_everything();
        report.extend(self.create_network(&self.config.shared_network));
        report.extend(self.build_everything());
        report
    }

    pub fn reset_everything(&self) -> Report {
        let mut report = self.stop_all();
        report.extend(self.system_prune());
        report.extend(self.volume_prune());
        report
    }

    pub fn build_everything(&self) -> Report {
        let mut report = self.build(&self.config.app.directory);
        report.extend(self.build(&self.config.cicd.directory));
        report
    }

    pub fn reset_rebuild_compose(&self, dir: &Path) -> Report {
        let mut report = vec![
            self.run_in(command_lines::COMPOSE_DOWN_VOLUMES, dir),
            self.run_in(command_lines::IMAGE_PRUNE, dir),
        ];
        report.extend(self.build(dir));
        report
    }

    pub fn project_dir(&self, project: Project) -> &'a Path {
        &self.config.project(project).directory
    }
}
