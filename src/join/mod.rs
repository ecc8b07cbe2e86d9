//! Join indexes for querycalc
//!
//! The query joins T1 against the full T2×T3 cross product on
//! `a < b + c`. Instead of materializing that join, two sorted indexes are
//! built once:
//!
//! - `BcJoinIndex`: T2×T3 sorted by `b + c`, with suffix sums of `y * z`
//! - `AGroupIndex`: T1 grouped by `a`, sorted by `a`
//!
//! Both carry suffix envelopes that bound every score still reachable
//! further along an ascending scan.

mod a_group;
mod bc_index;
mod errors;

pub use a_group::{AEntry, AGroupIndex};
pub use bc_index::{BcEntry, BcJoinIndex, Envelope};
pub(crate) use bc_index::canonical_f64;
pub use errors::{JoinError, JoinResult, JoinSide};
