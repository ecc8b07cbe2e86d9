//! Query configuration
//!
//! Optional JSON file; every field has a default, so `{}` is a valid
//! configuration. Unknown fields are rejected.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{QueryError, QueryResult};
use crate::observability::Severity;
use crate::ranking::DEFAULT_LIMIT;

/// Largest accepted `limit`
pub const MAX_LIMIT: usize = 1000;

/// Configuration for a query run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QueryConfig {
    /// Number of rows returned (default 10)
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Read buffer per table file in bytes (default 4MB)
    #[serde(default = "default_read_buffer_bytes")]
    pub read_buffer_bytes: usize,

    /// Largest row count a table may declare (default 1,000,000)
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,

    /// Lowest log severity emitted: trace, info, warn or error
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}
fn default_read_buffer_bytes() -> usize {
    4 * 1024 * 1024
}
fn default_max_rows() -> usize {
    1_000_000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            read_buffer_bytes: default_read_buffer_bytes(),
            max_rows: default_max_rows(),
            log_level: default_log_level(),
        }
    }
}

impl QueryConfig {
    /// Load configuration from file
    pub fn load(path: &Path) -> QueryResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            QueryError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> QueryResult<Self> {
        let config: QueryConfig = serde_json::from_str(content)
            .map_err(|e| QueryError::Config(format!("Invalid config JSON: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field ranges
    pub fn validate(&self) -> QueryResult<()> {
        if self.limit == 0 || self.limit > MAX_LIMIT {
            return Err(QueryError::Config(format!(
                "limit must be between 1 and {}, got {}",
                MAX_LIMIT, self.limit
            )));
        }

        if self.read_buffer_bytes == 0 {
            return Err(QueryError::Config("read_buffer_bytes must be > 0".to_string()));
        }

        if self.max_rows == 0 || self.max_rows > u32::MAX as usize {
            return Err(QueryError::Config(format!(
                "max_rows must be between 1 and {}, got {}",
                u32::MAX,
                self.max_rows
            )));
        }

        self.severity()?;
        Ok(())
    }

    /// The configured log threshold
    pub fn severity(&self) -> QueryResult<Severity> {
        match Severity::parse(&self.log_level) {
            Some(Severity::Fatal) | None => Err(QueryError::Config(format!(
                "Invalid log_level: '{}'. Expected trace, info, warn or error.",
                self.log_level
            ))),
            Some(severity) => Ok(severity),
        }
    }
}
