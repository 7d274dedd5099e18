//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fabula binary.

mod check;
mod commands;
mod console;
mod run;

pub use check::check_setup;
pub use commands::{Cli, Commands};
pub use console::run_console;
pub use run::run_story;
