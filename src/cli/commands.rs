//! CLI command implementations
//!
//! Each command loads the configuration, applies its log threshold, does its
//! work, and prints one JSON response. Failures print a JSON error object
//! and are returned to `main` for a non-zero exit.

use std::path::Path;

use serde_json::json;

use crate::observability::{log_event_with_fields, Event, Logger};
use crate::query::{QueryCalc, QueryConfig};

use super::args::Command;
use super::errors::CliResult;
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    let outcome = match cmd {
        Command::Select {
            t1,
            t2,
            t3,
            output,
            config,
            limit,
        } => select(&t1, &t2, &t3, &output, config.as_deref(), limit),
        Command::Check { table, config } => check(&table, config.as_deref()),
    };

    if let Err(e) = &outcome {
        // Best effort; the original error is what main reports.
        let _ = write_error(e.code_str(), e.message());
    }
    outcome
}

/// Run the ranked join and write the result file
///
/// `limit` overrides the configured row limit.
pub fn select(
    t1: &Path,
    t2: &Path,
    t3: &Path,
    output: &Path,
    config_path: Option<&Path>,
    limit: Option<usize>,
) -> CliResult<()> {
    let mut config = load_config(config_path)?;
    if let Some(limit) = limit {
        config.limit = limit;
        config.validate()?;
    }

    let result = QueryCalc::with_config(config).select(t1, t2, t3, output)?;

    write_response(json!({
        "output": output.display().to_string(),
        "rows": result.len(),
        "groups": result.group_count,
        "scanned": result.scanned_count,
        "pruned": result.pruned
    }))
}

/// Parse one table file and report its size
pub fn check(table: &Path, config_path: Option<&Path>) -> CliResult<()> {
    let config = load_config(config_path)?;
    let (declared, groups) = QueryCalc::with_config(config).inspect(table)?;

    write_response(json!({
        "table": table.display().to_string(),
        "rows": declared,
        "distinct_a": groups.len()
    }))
}

/// Loads the configuration (defaults when no path is given) and applies its
/// log threshold.
fn load_config(path: Option<&Path>) -> CliResult<QueryConfig> {
    let config = match path {
        Some(path) => QueryConfig::load(path)?,
        None => QueryConfig::default(),
    };
    Logger::set_min_severity(config.severity()?);

    let limit = config.limit.to_string();
    let source = path.map_or_else(|| "defaults".to_string(), |p| p.display().to_string());
    log_event_with_fields(
        Event::ConfigLoaded,
        &[("source", source.as_str()), ("limit", limit.as_str())],
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_select_command_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("t1"), "2\n1 1\n4 2\n").unwrap();
        fs::write(dir.path().join("t2"), "1\n3 2\n").unwrap();
        fs::write(dir.path().join("t3"), "1\n0 5\n").unwrap();
        let output = dir.path().join("out");

        run_command(Command::Select {
            t1: dir.path().join("t1"),
            t2: dir.path().join("t2"),
            t3: dir.path().join("t3"),
            output: output.clone(),
            config: None,
            limit: None,
        })
        .unwrap();

        // a=1 joins (3+0) with weight 10; a=4 joins nothing
        let content = fs::read_to_string(&output).unwrap();
        assert_eq!(content, "2\n1.000000 10.000000\n4.000000 0.000000\n");
    }

    #[test]
    fn test_limit_flag_validated() {
        let dir = tempfile::tempdir().unwrap();
        let err = select(
            &dir.path().join("t1"),
            &dir.path().join("t2"),
            &dir.path().join("t3"),
            &dir.path().join("out"),
            None,
            Some(0),
        )
        .unwrap_err();
        assert_eq!(err.code_str(), "QC_CONFIG_ERROR");
    }

    #[test]
    fn test_check_missing_table() {
        let err = check(Path::new("/nonexistent/t1"), None).unwrap_err();
        assert_eq!(err.code_str(), "QC_IO_ERROR");
    }

    #[test]
    fn test_check_malformed_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t1");
        fs::write(&path, "2\n1 1\n").unwrap();

        let err = check(&path, None).unwrap_err();
        assert_eq!(err.code_str(), "QC_FORMAT_ERROR");
    }

    #[test]
    fn test_bad_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("querycalc.json");
        fs::write(&path, r#"{"limit": "ten"}"#).unwrap();

        let err = check(&dir.path().join("t1"), Some(&path)).unwrap_err();
        assert_eq!(err.code_str(), "QC_CONFIG_ERROR");
    }
}
