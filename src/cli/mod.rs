//! Line-protocol front end: one command per line in, one response per line
//! out.

pub mod commands;
pub mod context;
pub mod format;
pub mod help;
pub mod output;
pub mod registry;
mod shell;

pub use context::{CliMode, CommandError, ShellContext};
pub use shell::run_cli;
