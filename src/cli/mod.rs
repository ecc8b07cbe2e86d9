//! CLI module for querycalc
//!
//! Provides command-line interface for:
//! - select: run the query and write the result file
//! - check: validate a single table file

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, select};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
