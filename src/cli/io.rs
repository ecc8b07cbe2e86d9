//! JSON responses for the CLI
//!
//! One JSON object per command on stdout, UTF-8, newline terminated.

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::CliResult;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    write_response_to(&mut io::stdout(), data)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_error_to(&mut io::stdout(), code, message)
}

fn write_response_to<W: Write>(writer: &mut W, data: Value) -> CliResult<()> {
    let response = json!({
        "status": "ok",
        "data": data
    });
    write_line(writer, &response)
}

fn write_error_to<W: Write>(writer: &mut W, code: &str, message: &str) -> CliResult<()> {
    let response = json!({
        "status": "error",
        "code": code,
        "message": message
    });
    write_line(writer, &response)
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
