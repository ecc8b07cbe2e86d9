//! Query error types
//!
//! Error codes:
//! - QC_FORMAT_ERROR: a table file is malformed
//! - QC_IO_ERROR: a file cannot be opened, read or written
//! - QC_CONFIG_ERROR: the configuration is unreadable or invalid
//!
//! All three are fatal to the query. Nothing is retried.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::join::{JoinError, JoinSide};
use crate::tuples::TupleError;

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Query failure
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Malformed table {table}: {source}")]
    Format {
        table: &'static str,
        #[source]
        source: TupleError,
    },

    #[error("I/O error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl QueryError {
    /// Classifies a table read failure for `table` stored at `path`
    pub fn from_table(table: &'static str, path: &Path, error: TupleError) -> Self {
        match error {
            TupleError::Io(source) => QueryError::Io {
                path: path.to_path_buf(),
                source,
            },
            source => QueryError::Format { table, source },
        }
    }

    /// Classifies a B×C build failure, B side read from `t2`, C side from `t3`
    pub fn from_join(error: JoinError, t2: &Path, t3: &Path) -> Self {
        match error.side {
            JoinSide::B => Self::from_table("t2", t2, error.source),
            JoinSide::C => Self::from_table("t3", t3, error.source),
        }
    }

    /// Returns the error code string
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::Format { .. } => "QC_FORMAT_ERROR",
            QueryError::Io { .. } => "QC_IO_ERROR",
            QueryError::Config(_) => "QC_CONFIG_ERROR",
        }
    }

    /// Returns true if an input file was malformed
    pub fn is_format_error(&self) -> bool {
        matches!(self, QueryError::Format { .. })
    }
}
