//! Menu actions: the docker operations a transition can trigger.
//!
//! Actions are plain data (projects and service indexes, not strings) so the
//! transition table can be tested without running anything. `execute` resolves
//! them against the configuration held by `DockerOps`.

use crate::commands::docker::{DockerOps, Report};
use crate::core::config::{Config, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartAll,
    StopAll,
    ResetRebuildEverything,
    ResetEverything,
    BuildEverything,
    DeleteImages,
    VolumePrune,
    SystemPrune,
    CreateSharedNetwork,
    CreateProjectNetwork(Project),
    ResetRebuildCompose(Project),
    /// `docker compose up -d --build` for the whole project.
    Build(Project),
    ComposeUp(Project),
    /// Service index into the project's configured service list.
    RebuildService(Project, usize),
    StartService(Project, usize),
    StopService(Project, usize),
    StopAllServices(Project),
    ShowJenkinsPassword,
}

impl Action {
    pub fn execute(self, ops: &DockerOps<'_>) -> Report {
        let config = ops.config();
        match self {
            Action::StartAll => ops.start_all(),
            Action::StopAll => ops.stop_all(),
            Action::ResetRebuildEverything => ops.reset_rebuild_everything(),
            Action::ResetEverything => ops.reset_everything(),
            Action::BuildEverything => ops.build_everything(),
            Action::DeleteImages => ops.delete_images(),
            Action::VolumePrune => ops.volume_prune(),
            Action::SystemPrune => ops.system_prune(),
            Action::CreateSharedNetwork => ops.create_network(&config.shared_network),
            Action::CreateProjectNetwork(project) => {
                ops.create_network(&config.project(project).network)
            }
            Action::ResetRebuildCompose(project) => {
                ops.reset_rebuild_compose(ops.project_dir(project))
            }
            Action::Build(project) => ops.build(ops.project_dir(project)),
            Action::ComposeUp(project) => ops.compose_up(ops.project_dir(project)),
            Action::RebuildService(project, index) => {
                ops.rebuild_service(service_name(config, project, index), ops.project_dir(project))
            }
            Action::StartService(project, index) => {
                ops.start_service(service_name(config, project, index), ops.project_dir(project))
            }
            Action::StopService(project, index) => {
                ops.stop_service(service_name(config, project, index), ops.project_dir(project))
            }
            Action::StopAllServices(project) => {
                ops.stop_services(&config.project(project).services, ops.project_dir(project))
            }
            Action::ShowJenkinsPassword => ops.show_jenkins_password(ops.project_dir(Project::CiCd)),
        }
    }
}

fn service_name(config: &Config, project: Project, index: usize) -> &str {
    config.project(project).services[index].as_str()
}
