//! Table file error types
//!
//! Every variant except `Io` describes malformed input and is fatal to
//! the query that reads it.

use std::io;

use thiserror::Error;

/// Result type for table reading
pub type TupleResult<T> = Result<T, TupleError>;

/// Errors raised while reading a two-column table
#[derive(Debug, Error)]
pub enum TupleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Missing row count")]
    MissingCount,

    #[error("Invalid row count '{0}'")]
    InvalidCount(String),

    #[error("Declared row count {declared} exceeds the limit of {limit}")]
    CountTooLarge { declared: usize, limit: usize },

    #[error("Invalid number '{token}' in row {row}")]
    InvalidNumber { token: String, row: usize },

    #[error("Row {row} has only one value; expected two")]
    IncompleteRow { row: usize },

    #[error("Declared {declared} rows but found {found}")]
    RowCountMismatch { declared: usize, found: usize },

    #[error("Unexpected data after the {declared} declared rows")]
    TrailingData { declared: usize },

    #[error("Token longer than {0} bytes")]
    TokenTooLong(usize),
}

impl TupleError {
    /// Returns true for malformed-input errors, false for I/O failures
    pub fn is_format_error(&self) -> bool {
        !matches!(self, TupleError::Io(_))
    }
}
