//! Result file writer
//!
//! Output layout:
//! - first line: number of rows `k`
//! - then `k` lines of `<a> <s>`, both with exactly six fractional digits
//!
//! Rust's float formatting never groups digits and always uses `.`, so the
//! output is locale independent.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::ranking::RankedRow;

/// Fractional digits printed for every value
pub const FRACTION_DIGITS: usize = 6;

/// Serializes ranked rows
pub struct ResultWriter;

impl ResultWriter {
    /// Writes `rows` to `writer` in output order.
    pub fn write<W: Write>(rows: &[RankedRow], writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}", rows.len())?;
        for row in rows {
            writeln!(writer, "{}", Self::format_row(row))?;
        }
        Ok(())
    }

    /// Creates (or truncates) `path` and writes `rows` to it.
    pub fn write_to_path(rows: &[RankedRow], path: &Path) -> io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        Self::write(rows, &mut writer)?;
        writer.flush()
    }

    /// Formats one row as `<a> <s>`
    pub fn format_row(row: &RankedRow) -> String {
        format!(
            "{:.prec$} {:.prec$}",
            row.a_value,
            row.sum_xyz,
            prec = FRACTION_DIGITS
        )
    }
}
