//! # devstack Interactive Menu
//!
//! File: cli/src/commands/menu/mod.rs
//!
//! ## Overview
//!
//! The interactive front-end: a finite-state machine over ten menus (`Main`,
//! `App`, `CiCd`, `DockerGlobal` and the six service submenus). Each step
//! prints the current menu and the prompt, reads one line, looks up the
//! transition and executes its actions.
//!
//! ## Behavior
//!
//! - Choosing an action runs it and ends the session. The menu does not loop
//!   back to `Main`; the user relaunches for further actions.
//! - Unrecognized input at `Main` ends the session with `MenuOutcome::Exited`.
//! - Unrecognized input anywhere else shows the parent menu again.
//! - End of input reads as an empty line, so a closed stdin always unwinds to
//!   `Main` and exits.
//!
//! ## Architecture
//!
//! - `state`: `MenuState`, `Transition`, `Next` and the pure `transition` table.
//! - `action`: `Action`, the data form of each docker operation.
//! - `Menu`: binds configuration and `DockerOps` and drives the loop over any
//!   `BufRead` input and `Write` output, which keeps it testable.
//!
mod action;
mod state;

use state::{transition, MenuState, Next};

use crate::commands::docker::DockerOps;
use crate::common::process::CommandRunner;
use crate::common::ui::{self, Weight};
use crate::core::config::Config;
use crate::core::error::Result;
use anyhow::Context;
use colored::Color;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// How an interactive session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// An action was chosen and executed.
    Completed,
    /// Unrecognized input at the main menu.
    Exited,
}

pub struct Menu<'a> {
    config: &'a Config,
    ops: DockerOps<'a>,
}

impl<'a> Menu<'a> {
    pub fn new(config: &'a Config, runner: &'a dyn CommandRunner) -> Self {
        Self {
            config,
            ops: DockerOps::new(config, runner),
        }
    }

    /// Runs the state machine from `Main` until an action completes or the
    /// main menu receives unrecognized input.
    ///
    /// # Errors
    ///
    /// Only console I/O failures are returned. Failing docker commands are
    /// reported by the runner and do not end the session with an error.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<MenuOutcome> {
        let mut state = MenuState::Main;
        loop {
            writeln!(output, "{}", state.render(self.config))
                .context("Failed to write menu")?;
            write!(
                output,
                "{}",
                ui::stylize(Weight::Bold, Color::White, ui::PROMPT)
            )
            .context("Failed to write prompt")?;
            output.flush().context("Failed to flush prompt")?;

            let choice = ui::read_choice(input).context("Failed to read menu choice")?;
            let step = transition(state, &choice, self.config);
            debug!("{:?} + {:?} -> {:?}", state, choice, step);

            for action in &step.actions {
                info!("Executing {:?}", action);
                let report = action.execute(&self.ops);
                let failed = report.iter().filter(|r| !r.success()).count();
                if failed > 0 {
                    debug!("{:?}: {} of {} commands failed", action, failed, report.len());
                }
            }

            match step.next {
                Next::Goto(next) => state = next,
                Next::Done => return Ok(MenuOutcome::Completed),
                Next::Exit => return Ok(MenuOutcome::Exited),
            }
        }
    }
}
