//! # devstack UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Console presentation shared by every component: ANSI styling of text, the
//! fixed `Log>` / `ERROR!` line formats, operation headers, and reading one
//! line of menu input.
//!
//! Styling goes through the `colored` crate. A style is a weight (`Bold` or
//! `Regular`) plus one of the eight basic foreground colors, which renders as
//! `ESC[<weight>;<color>m ... ESC[0m` on an ANSI terminal.
//!
use colored::{Color, ColoredString, Colorize};
use std::io::BufRead;

/// Font weight of a styled string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Text shown after every menu listing.
pub const PROMPT: &str = "Please, choose an option by introducing its number>";

/// Applies a weight and a foreground color to `text`.
pub fn stylize(weight: Weight, color: Color, text: &str) -> ColoredString {
    let colored = text.color(color);
    match weight {
        Weight::Bold => colored.bold(),
        Weight::Regular => colored,
    }
}

/// `Log> <message>` in bold green. Used for completion notices.
pub fn log_success(message: &str) -> String {
    format!("Log> {}", stylize(Weight::Bold, Color::Green, message))
}

/// `ERROR!> <message>` with the marker in bold red.
pub fn log_error(message: &str) -> String {
    format!("{}> {}", stylize(Weight::Bold, Color::Red, "ERROR!"), message)
}

/// Line printed by the command runner after a successful command.
pub fn command_success(command: &str) -> String {
    format!(
        "Log> {} -> {}",
        stylize(Weight::Bold, Color::Green, "Command successfully executed"),
        stylize(Weight::Bold, Color::White, command)
    )
}

/// Operation header, e.g. ` Pruning system...` in bold yellow.
pub fn header(message: &str) -> String {
    format!(" {}", stylize(Weight::Bold, Color::Yellow, message))
}

/// Farewell printed when the main menu receives an unrecognized option.
pub fn farewell() -> String {
    format!("Log> {}", stylize(Weight::Bold, Color::Red, "Program finished."))
}

/// Upper-cases the first character, lower-cases the rest (`backendApp` -> `Backendapp`).
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reads one line from `input` with the trailing line terminator removed.
///
/// End of input yields an empty string, which no menu recognizes.
pub fn read_choice<R: BufRead>(input: &mut R) -> std::io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
