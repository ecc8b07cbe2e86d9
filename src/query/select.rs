//! Query entry point
//!
//! Execution order:
//! 1. Build the B×C join index from t2 and t3
//! 2. Group t1 by `a` in one streaming pass
//! 3. Run the ranked join
//! 4. Write the output file
//!
//! The output file is created only after step 3, so malformed or missing
//! input never leaves an output file behind.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::config::QueryConfig;
use super::errors::{QueryError, QueryResult};
use crate::join::{AGroupIndex, BcJoinIndex};
use crate::observability::{log_event_with_fields, Event, ObservationScope};
use crate::output::ResultWriter;
use crate::ranking::{RankedJoinEngine, RankedResult};
use crate::tuples::{PairSource, TuplesReader};

/// Evaluates the ranked join query over table files
#[derive(Debug, Clone, Default)]
pub struct QueryCalc {
    config: QueryConfig,
}

impl QueryCalc {
    /// Creates a query runner with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query runner with `config`
    pub fn with_config(config: QueryConfig) -> Self {
        Self { config }
    }

    /// Reads t1, t2 and t3, ranks, and writes the result to `output`.
    ///
    /// # Errors
    ///
    /// Returns `QC_FORMAT_ERROR` for malformed tables, `QC_IO_ERROR` for
    /// unreadable inputs or an unwritable output, `QC_CONFIG_ERROR` for an
    /// invalid configuration.
    pub fn select(
        &self,
        t1: &Path,
        t2: &Path,
        t3: &Path,
        output: &Path,
    ) -> QueryResult<RankedResult> {
        let output_name = output.display().to_string();
        let scope = ObservationScope::with_fields("SELECT", &[("output", output_name.as_str())]);

        let outcome = self.rank(t1, t2, t3).and_then(|result| {
            ResultWriter::write_to_path(&result.rows, output).map_err(|source| QueryError::Io {
                path: output.to_path_buf(),
                source,
            })?;
            let rows = result.len().to_string();
            log_event_with_fields(Event::ResultWritten, &[("rows", rows.as_str())]);
            Ok(result)
        });

        match outcome {
            Ok(result) => {
                scope.complete_with_fields(&[("rows", result.len().to_string().as_str())]);
                Ok(result)
            }
            Err(e) => {
                if e.is_format_error() {
                    let reason = e.to_string();
                    log_event_with_fields(Event::InputMalformed, &[("reason", reason.as_str())]);
                }
                scope.fail(e.code(), &e.to_string());
                Err(e)
            }
        }
    }

    /// Reads t1, t2 and t3 and returns the ranked rows without writing.
    pub fn rank(&self, t1: &Path, t2: &Path, t3: &Path) -> QueryResult<RankedResult> {
        self.config.validate()?;

        let bc = {
            let mut b_side = self.open("t2", t2)?;
            let mut c_side = self.open("t3", t3)?;
            BcJoinIndex::build(&mut b_side, &mut c_side)
                .map_err(|e| QueryError::from_join(e, t2, t3))?
        };
        log_event_with_fields(Event::BcIndexBuilt, &[("entries", bc.len().to_string().as_str())]);

        let groups = self.group("t1", t1)?;
        let group_count = groups.len().to_string();
        log_event_with_fields(Event::AGroupsBuilt, &[("groups", group_count.as_str())]);

        let result = RankedJoinEngine::with_limit(&bc, self.config.limit).execute(&groups);
        let scanned = result.scanned_count.to_string();
        if result.pruned {
            log_event_with_fields(
                Event::RankingPruned,
                &[("scanned", scanned.as_str()), ("groups", groups.len().to_string().as_str())],
            );
        }
        log_event_with_fields(Event::RankingComplete, &[("scanned", scanned.as_str())]);

        Ok(result)
    }

    /// Reads one table and returns its declared row count and distinct `a`
    /// groups.
    pub fn inspect(&self, table: &Path) -> QueryResult<(usize, AGroupIndex)> {
        self.config.validate()?;

        let mut reader = self.open("table", table)?;
        let declared = reader.declared_count();
        let groups = AGroupIndex::build(&mut reader)
            .map_err(|e| QueryError::from_table("table", table, e))?;
        Ok((declared, groups))
    }

    fn group(&self, name: &'static str, path: &Path) -> QueryResult<AGroupIndex> {
        let mut reader = self.open(name, path)?;
        AGroupIndex::build(&mut reader).map_err(|e| QueryError::from_table(name, path, e))
    }

    fn open(&self, name: &'static str, path: &Path) -> QueryResult<TuplesReader<BufReader<File>>> {
        TuplesReader::open(path, self.config.read_buffer_bytes, self.config.max_rows)
            .map_err(|e| QueryError::from_table(name, path, e))
    }
}

/// Runs the query with default configuration, writing `output`.
pub fn select(t1: &Path, t2: &Path, t3: &Path, output: &Path) -> QueryResult<()> {
    QueryCalc::new().select(t1, t2, t3, output).map(|_| ())
}
