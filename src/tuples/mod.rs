//! Table input for querycalc
//!
//! Each of the three query tables is a two-column numeric table read once,
//! front to back. `PairSource` is the seam between file parsing and the
//! join indexes, which never see text.

mod errors;
mod reader;
mod source;

pub use errors::{TupleError, TupleResult};
pub use reader::{TuplesReader, MAX_TOKEN_BYTES};
pub use source::{MemorySource, PairSource};
