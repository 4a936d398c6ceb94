//! Menu states and the transition table.
//!
//! `transition` is a pure function of `(state, input, config)`. Inputs are
//! compared literally against the option numbers, so `" 1"` or `"01"` are
//! unrecognized.

use super::action::Action;
use crate::common::ui::{self, Weight};
use crate::commands::docker::JENKINS_SERVICE;
use crate::core::config::{Config, Project};
use colored::Color;

const MAIN_OPTIONS: &[&str] = &["APP menu.", "CI-CD Menu.", "Docker Menu."];
const APP_OPTIONS: &[&str] = &[
    "Rebuild APP services.",
    "Start APP services.",
    "Stop APP services.",
    "Reset and Rebuild APP.",
    "Create APP docker network.",
];
const CICD_OPTIONS: &[&str] = &[
    "Rebuild CI-CD services.",
    "Start CI-CD services.",
    "Stop CI-CD services.",
    "Reset and Rebuild CI-CD.",
    "Create CI-CD docker network.",
];
const DOCKER_OPTIONS: &[&str] = &[
    "Start all containers.",
    "Stop all containers.",
    "Reset and Rebuild EVERYTHING.",
    "Reset EVERYTHING.",
    "Build EVERYTHING.",
    "Delete ALL images.",
    "Delete ALL volumes.",
    "System prune ALL.",
    "Create docker shared_network.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    Main,
    App,
    CiCd,
    CiCdRebuildSub,
    CiCdStartSub,
    CiCdStopSub,
    AppRebuildSub,
    AppStartSub,
    AppStopSub,
    DockerGlobal,
}

/// Where the menu goes after handling one line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    Goto(MenuState),
    /// An action ran; the session is over.
    Done,
    /// Unrecognized input at the main menu.
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub actions: Vec<Action>,
    pub next: Next,
}

impl Transition {
    fn goto(state: MenuState) -> Self {
        Self {
            actions: Vec::new(),
            next: Next::Goto(state),
        }
    }

    fn run(actions: Vec<Action>) -> Self {
        Self {
            actions,
            next: Next::Done,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ServiceMenu {
    Rebuild,
    Start,
    Stop,
}

impl MenuState {
    /// The menu shown again after unrecognized input. `None` for `Main`.
    pub fn parent(self) -> Option<MenuState> {
        match self {
            MenuState::Main => None,
            MenuState::App | MenuState::CiCd | MenuState::DockerGlobal => Some(MenuState::Main),
            MenuState::AppRebuildSub | MenuState::AppStartSub | MenuState::AppStopSub => {
                Some(MenuState::App)
            }
            MenuState::CiCdRebuildSub | MenuState::CiCdStartSub | MenuState::CiCdStopSub => {
                Some(MenuState::CiCd)
            }
        }
    }

    fn service_menu(self) -> Option<(Project, ServiceMenu)> {
        match self {
            MenuState::AppRebuildSub => Some((Project::App, ServiceMenu::Rebuild)),
            MenuState::AppStartSub => Some((Project::App, ServiceMenu::Start)),
            MenuState::AppStopSub => Some((Project::App, ServiceMenu::Stop)),
            MenuState::CiCdRebuildSub => Some((Project::CiCd, ServiceMenu::Rebuild)),
            MenuState::CiCdStartSub => Some((Project::CiCd, ServiceMenu::Start)),
            MenuState::CiCdStopSub => Some((Project::CiCd, ServiceMenu::Stop)),
            _ => None,
        }
    }

    /// Title and numbered options, without the prompt.
    pub fn render(self, config: &Config) -> String {
        if let Some((project, kind)) = self.service_menu() {
            return render_service_menu(kind, &config.project(project).services);
        }
        let (title, color, options) = match self {
            MenuState::Main => ("MAIN MENU", Color::Magenta, MAIN_OPTIONS),
            MenuState::App => ("APP MENU", Color::Cyan, APP_OPTIONS),
            MenuState::CiCd => ("CI-CD MENU", Color::Yellow, CICD_OPTIONS),
            // DockerGlobal; service menus returned above.
            _ => ("DOCKER MENU", Color::Blue, DOCKER_OPTIONS),
        };
        let items: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        numbered(ui::stylize(Weight::Bold, color, title).to_string(), &items)
    }
}

fn render_service_menu(kind: ServiceMenu, services: &[String]) -> String {
    let (title, color) = match kind {
        ServiceMenu::Rebuild => ("SERVICES to REBUILD", Color::Yellow),
        ServiceMenu::Start => ("SERVICES to START", Color::Green),
        ServiceMenu::Stop => ("SERVICES to STOP", Color::Red),
    };
    let mut items: Vec<String> = services
        .iter()
        .map(|s| format!("{}.", ui::capitalize(s)))
        .collect();
    items.push("ALL.".to_string());
    numbered(ui::stylize(Weight::Regular, color, title).to_string(), &items)
}

fn numbered(title: String, items: &[String]) -> String {
    let mut out = format!("{title}:");
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", i + 1, item));
    }
    out
}

/// Matches `input` literally against `1..=count`, returning the 0-based index.
fn option_index(input: &str, count: usize) -> Option<usize> {
    (1..=count).find(|n| n.to_string() == input).map(|n| n - 1)
}

/// Computes the transition for one line of input.
pub fn transition(state: MenuState, input: &str, config: &Config) -> Transition {
    if let Some((project, kind)) = state.service_menu() {
        return service_transition(state, project, kind, input, config);
    }
    match (state, input) {
        (MenuState::Main, "1") => Transition::goto(MenuState::App),
        (MenuState::Main, "2") => Transition::goto(MenuState::CiCd),
        (MenuState::Main, "3") => Transition::goto(MenuState::DockerGlobal),
        (MenuState::Main, _) => Transition {
            actions: Vec::new(),
            next: Next::Exit,
        },

        (MenuState::App, "1") => Transition::goto(MenuState::AppRebuildSub),
        (MenuState::App, "2") => Transition::goto(MenuState::AppStartSub),
        (MenuState::App, "3") => Transition::goto(MenuState::AppStopSub),
        (MenuState::App, "4") => Transition::run(vec![Action::ResetRebuildCompose(Project::App)]),
        (MenuState::App, "5") => Transition::run(vec![Action::CreateProjectNetwork(Project::App)]),

        (MenuState::CiCd, "1") => Transition::goto(MenuState::CiCdRebuildSub),
        (MenuState::CiCd, "2") => Transition::goto(MenuState::CiCdStartSub),
        (MenuState::CiCd, "3") => Transition::goto(MenuState::CiCdStopSub),
        (MenuState::CiCd, "4") => Transition::run(vec![Action::ResetRebuildCompose(Project::CiCd)]),
        (MenuState::CiCd, "5") => {
            Transition::run(vec![Action::CreateProjectNetwork(Project::CiCd)])
        }

        (MenuState::DockerGlobal, "1") => Transition::run(vec![Action::StartAll]),
        (MenuState::DockerGlobal, "2") => Transition::run(vec![Action::StopAll]),
        (MenuState::DockerGlobal, "3") => Transition::run(vec![Action::ResetRebuildEverything]),
        (MenuState::DockerGlobal, "4") => Transition::run(vec![Action::ResetEverything]),
        (MenuState::DockerGlobal, "5") => Transition::run(vec![Action::BuildEverything]),
        (MenuState::DockerGlobal, "6") => Transition::run(vec![Action::DeleteImages]),
        (MenuState::DockerGlobal, "7") => Transition::run(vec![Action::VolumePrune]),
        (MenuState::DockerGlobal, "8") => Transition::run(vec![Action::SystemPrune]),
        (MenuState::DockerGlobal, "9") => Transition::run(vec![Action::CreateSharedNetwork]),

        (other, _) => back_to_parent(other),
    }
}

fn service_transition(
    state: MenuState,
    project: Project,
    kind: ServiceMenu,
    input: &str,
    config: &Config,
) -> Transition {
    let services = &config.project(project).services;
    let Some(choice) = option_index(input, services.len() + 1) else {
        return back_to_parent(state);
    };
    let all = choice == services.len();
    let actions = match (kind, all) {
        (ServiceMenu::Rebuild, true) => vec![Action::Build(project)],
        (ServiceMenu::Rebuild, false) => {
            let mut actions = vec![Action::RebuildService(project, choice)];
            if project == Project::CiCd && services[choice] == JENKINS_SERVICE {
                actions.push(Action::ShowJenkinsPassword);
            }
            actions
        }
        (ServiceMenu::Start, true) => vec![Action::ComposeUp(project)],
        (ServiceMenu::Start, false) => vec![Action::StartService(project, choice)],
        (ServiceMenu::Stop, true) => vec![Action::StopAllServices(project)],
        (ServiceMenu::Stop, false) => vec![Action::StopService(project, choice)],
    };
    Transition::run(actions)
}

fn back_to_parent(state: MenuState) -> Transition {
    match state.parent() {
        Some(parent) => Transition::goto(parent),
        None => Transition {
            actions: Vec::new(),
            next: Next::Exit,
        },
    }
}
