//! CLI argument definitions using clap
//!
//! Commands:
//! - querycalc select --t1 <path> --t2 <path> --t3 <path> --output <path>
//! - querycalc check --table <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// querycalc - ranked join over three numeric tables
#[derive(Parser, Debug)]
#[command(name = "querycalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rank t1 against the t2 x t3 join and write the top rows
    Select {
        /// Table t1 (columns a, x)
        #[arg(long)]
        t1: PathBuf,

        /// Table t2 (columns b, y)
        #[arg(long)]
        t2: PathBuf,

        /// Table t3 (columns c, z)
        #[arg(long)]
        t3: PathBuf,

        /// Result file to write
        #[arg(long)]
        output: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of rows to return, overriding the configuration
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Parse a table file and report its row and distinct-value counts
    Check {
        /// Table file to check
        #[arg(long)]
        table: PathBuf,

        /// Path to configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_select() {
        let cli = Cli::try_parse_from([
            "querycalc", "select", "--t1", "a", "--t2", "b", "--t3", "c", "--output", "out",
            "--limit", "5",
        ])
        .unwrap();

        match cli.command {
            Command::Select { t1, output, limit, config, .. } => {
                assert_eq!(t1, PathBuf::from("a"));
                assert_eq!(output, PathBuf::from("out"));
                assert_eq!(limit, Some(5));
                assert!(config.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_select_requires_output() {
        let result =
            Cli::try_parse_from(["querycalc", "select", "--t1", "a", "--t2", "b", "--t3", "c"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_check() {
        let cli = Cli::try_parse_from(["querycalc", "check", "--table", "t1"]).unwrap();
        assert!(matches!(cli.command, Command::Check { .. }));
    }
}
