//! # devstack Interactive Menu Integration Tests
//!
//! File: cli/tests/menu.rs
//!
//! ## Overview
//!
//! Drives the binary with piped stdin in `--dry-run` mode, so the exact command
//! lines are printed instead of executed and no docker daemon is needed.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_app_start_all_composes_up_app_directory() {
    let (_dir, mut cmd) = dry_run_session();
    cmd.write_stdin("1\n2\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SERVICES to START"))
        .stdout(predicate::str::contains(
            "[dry-run] (./docker) docker compose up -d\n",
        ));
}

#[test]
fn test_docker_menu_creates_shared_network() {
    let (_dir, mut cmd) = dry_run_session();
    cmd.write_stdin("3\n9\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating shared_network docker network..."))
        .stdout(predicate::str::contains(
            "[dry-run] docker network create shared_network",
        ));
}

#[test]
fn test_unrecognized_main_choice_exits_with_farewell() {
    let (_dir, mut cmd) = dry_run_session();
    cmd.write_stdin("x\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Program finished."))
        .stdout(predicate::str::contains("[dry-run]").not());
}

#[test]
fn test_closed_stdin_exits_with_farewell() {
    let (_dir, mut cmd) = dry_run_session();
    cmd.write_stdin("2\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Program finished."));
}

#[test]
fn test_reset_rebuild_everything_order() {
    let (_dir, mut cmd) = dry_run_session();
    let output = cmd.write_stdin("3\n3\n").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let commands: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("[dry-run]"))
        .collect();
    assert_eq!(
        commands,
        vec![
            "[dry-run] docker stop $(docker ps -q)",
            "[dry-run] docker system prune -a -f",
            "[dry-run] docker volume prune -a -f",
            "[dry-run] docker network create shared_network",
            "[dry-run] (./docker) docker compose up -d --build",
            "[dry-run] (./docker/cicdContainer) docker compose up -d --build",
        ]
    );
}

#[test]
fn test_cicd_stop_all_stops_each_service() {
    let (_dir, mut cmd) = dry_run_session();
    let output = cmd.write_stdin("2\n3\n4\n").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let commands: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("[dry-run]"))
        .collect();
    assert_eq!(
        commands,
        vec![
            "[dry-run] (./docker/cicdContainer) docker compose stop jenkins",
            "[dry-run] (./docker/cicdContainer) docker compose stop sonarqube",
            "[dry-run] (./docker/cicdContainer) docker compose stop postgres",
        ]
    );
}

#[test]
fn test_configured_services_drive_submenu() {
    let (dir, path) = temp_config(
        r#"
        [app]
        directory = "stack"
        services = ["db", "api", "web"]
        "#,
    );
    devstack_cmd()
        .current_dir(dir.path())
        .arg("--dry-run")
        .arg("--config")
        .arg(&path)
        .write_stdin("1\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("3. Web.\n4. ALL."))
        .stdout(predicate::str::contains(
            "[dry-run] (stack) docker compose rm -sf web",
        ));
}

#[cfg(unix)]
#[test]
fn test_failing_command_is_reported_not_fatal() {
    // A shell that fails every command: the session still completes.
    let (dir, path) = temp_config("[shell]\nprogram = \"false\"\nargs = []\n");
    devstack_cmd()
        .current_dir(dir.path())
        .arg("--config")
        .arg(&path)
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR!").count(3));
}
