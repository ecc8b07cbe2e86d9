//! Whitespace-delimited table reader
//!
//! File layout: a non-negative integer row count `n`, then exactly `2n`
//! numbers consumed pairwise as `(col1, col2)`. Tokens may be separated by
//! any ASCII whitespace, so a row does not have to sit on its own line.
//!
//! The reader is strict:
//! - a missing or non-integer count is rejected
//! - fewer than `n` rows, or anything after the `n`th row, is rejected
//! - a row holding a single value is rejected

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use super::errors::{TupleError, TupleResult};
use super::source::PairSource;

/// Longest token accepted before the input is declared malformed
pub const MAX_TOKEN_BYTES: usize = 128;

/// Streaming reader for one table file.
pub struct TuplesReader<R: BufRead> {
    reader: R,
    count: usize,
    rows_read: usize,
    /// Reused token buffer
    token: Vec<u8>,
}

impl TuplesReader<BufReader<File>> {
    /// Opens a table file and reads its row count.
    ///
    /// # Errors
    ///
    /// Returns `TupleError::Io` if the file cannot be opened, or a format
    /// error if the count is missing, invalid, or above `max_rows`.
    pub fn open(path: &Path, buffer_bytes: usize, max_rows: usize) -> TupleResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::with_capacity(buffer_bytes, file), max_rows)
    }
}

impl<R: BufRead> TuplesReader<R> {
    /// Wraps a buffered reader positioned at the start of a table.
    pub fn from_reader(mut reader: R, max_rows: usize) -> TupleResult<Self> {
        let mut token = Vec::with_capacity(32);
        if !read_token(&mut reader, &mut token)? {
            return Err(TupleError::MissingCount);
        }

        let count = std::str::from_utf8(&token)
            .ok()
            .and_then(|text| text.parse::<usize>().ok())
            .ok_or_else(|| TupleError::InvalidCount(String::from_utf8_lossy(&token).into_owned()))?;

        if count > max_rows {
            return Err(TupleError::CountTooLarge {
                declared: count,
                limit: max_rows,
            });
        }

        Ok(Self {
            reader,
            count,
            rows_read: 0,
            token,
        })
    }

    fn read_value(&mut self) -> TupleResult<Option<f64>> {
        if !read_token(&mut self.reader, &mut self.token)? {
            return Ok(None);
        }

        std::str::from_utf8(&self.token)
            .ok()
            .and_then(|text| text.parse::<f64>().ok())
            .map(Some)
            .ok_or_else(|| TupleError::InvalidNumber {
                token: String::from_utf8_lossy(&self.token).into_owned(),
                row: self.rows_read,
            })
    }
}

impl<R: BufRead> PairSource for TuplesReader<R> {
    fn declared_count(&self) -> usize {
        self.count
    }

    fn next_pair(&mut self) -> TupleResult<Option<(f64, f64)>> {
        if self.rows_read == self.count {
            if read_token(&mut self.reader, &mut self.token)? {
                return Err(TupleError::TrailingData {
                    declared: self.count,
                });
            }
            return Ok(None);
        }

        let first = match self.read_value()? {
            Some(v) => v,
            None => {
                return Err(TupleError::RowCountMismatch {
                    declared: self.count,
                    found: self.rows_read,
                })
            }
        };
        let second = self
            .read_value()?
            .ok_or(TupleError::IncompleteRow { row: self.rows_read })?;

        self.rows_read += 1;
        Ok(Some((first, second)))
    }
}

/// Reads the next whitespace-delimited token into `token`.
///
/// Returns `Ok(false)` when the input ends before any token byte.
fn read_token<R: BufRead>(reader: &mut R, token: &mut Vec<u8>) -> TupleResult<bool> {
    token.clear();

    loop {
        let buf = match reader.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        if buf.is_empty() {
            return Ok(!token.is_empty());
        }

        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            used += 1;
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                if token.len() == MAX_TOKEN_BYTES {
                    return Err(TupleError::TokenTooLong(MAX_TOKEN_BYTES));
                }
                token.push(byte);
            }
        }

        reader.consume(used);
        if complete {
            return Ok(true);
        }
    }
}
