//! Ranked execution for querycalc
//!
//! Produces the `STABLE ORDER BY s DESC LIMIT 10` result from the join
//! indexes without materializing T1×T2×T3.
//!
//! # Ordering
//!
//! - `sum_xyz` descending, by numeric value
//! - equal `sum_xyz`: first-occurrence row number ascending
//! - at most `limit` rows; a tie spanning the cut keeps its lowest row
//!   numbers

mod best_set;
mod engine;
mod result;

pub use best_set::BestSet;
pub use engine::{remaining_upper_bound, RankedJoinEngine, DEFAULT_LIMIT};
pub use result::{RankedResult, RankedRow};
