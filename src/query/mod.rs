//! Query entry point for querycalc
//!
//! Evaluates, over three two-column table files:
//!
//! ```sql
//! SELECT a, SUM(x * y * z) AS s
//! FROM t1 LEFT JOIN (SELECT * FROM t2 JOIN t3) AS t ON a < b + c
//! GROUP BY a
//! STABLE ORDER BY s DESC
//! LIMIT 10;
//! ```
//!
//! `STABLE` means ties on `s` keep the `a` whose first occurrence in t1
//! comes earlier.

mod config;
mod errors;
mod select;

pub use config::{QueryConfig, MAX_LIMIT};
pub use errors::{QueryError, QueryResult};
pub use select::{select, QueryCalc};
