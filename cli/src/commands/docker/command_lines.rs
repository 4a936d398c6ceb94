//! Literal docker command lines.
//!
//! The external tooling parses these strings as-is, so they must not be
//! reformatted. Substitutions like `$(docker ps -aq)` are resolved by the shell.

pub const START_ALL_CONTAINERS: &str = "docker start $(docker ps -aq)";
pub const STOP_ALL_CONTAINERS: &str = "docker stop $(docker ps -q)";
pub const SYSTEM_PRUNE: &str = "docker system prune -a -f";
pub const VOLUME_PRUNE: &str = "docker volume prune -a -f";
pub const DELETE_ALL_IMAGES: &str = "docker rmi -f $(docker images -aq)";
pub const COMPOSE_UP_BUILD: &str = "docker compose up -d --build";
pub const COMPOSE_UP: &str = "docker compose up -d";
pub const COMPOSE_DOWN_VOLUMES: &str = "docker compose down --volumes";
pub const IMAGE_PRUNE: &str = "docker image prune -f";

/// Path of the generated admin password inside the Jenkins container.
pub const JENKINS_PASSWORD_FILE: &str = "/var/jenkins_home/secrets/initialAdminPassword";

pub fn network_create(name: &str) -> String {
    format!("docker network create {name}")
}

pub fn compose_up_service(service: &str) -> String {
    format!("docker compose up -d {service}")
}

pub fn compose_stop_service(service: &str) -> String {
    format!("docker compose stop {service}")
}

/// Stops and force-removes the service container.
pub fn compose_rm_service(service: &str) -> String {
    format!("docker compose rm -sf {service}")
}

pub fn compose_build_service(service: &str) -> String {
    format!("docker compose build {service}")
}

/// Reads a file inside a running service container (legacy `docker-compose` binary).
pub fn compose_exec_cat(service: &str, file: &str) -> String {
    format!("docker-compose exec {service} cat {file}")
}
