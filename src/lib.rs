//! querycalc - top-10 ranked join over three numeric tables
//!
//! Evaluates
//!
//! ```text
//! SELECT a, SUM(x * y * z) AS sum_xyz
//! FROM t1 LEFT JOIN (t2 CROSS JOIN t3) ON a < b + c
//! GROUP BY a
//! ORDER BY sum_xyz DESC, first occurrence of a
//! LIMIT 10
//! ```
//!
//! without materializing the join: t2 × t3 is sorted by `b + c` with suffix
//! sums, t1 is grouped by `a`, and one ascending scan keeps the best rows
//! while a suffix bound prunes the rest.

pub mod cli;
pub mod join;
pub mod observability;
pub mod output;
pub mod query;
pub mod ranking;
pub mod tuples;
