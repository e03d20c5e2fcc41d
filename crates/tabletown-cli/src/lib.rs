//! Command-line front end for `tabletown`.
//!
//! The binary is a thin wrapper: [`cli::Cli`] describes the arguments and
//! [`commands::run`] executes a parsed command against any reader and writer,
//! which keeps every subcommand testable without spawning a process.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, InputFormat, RenderArgs};
pub use commands::run;
