//! CLI layer: argument parsing, command execution and output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use args::{Cli, LevelArg};
pub use commands::{execute_command, run_lookup};
pub use error::{CliError, CliResult};
