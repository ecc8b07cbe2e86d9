//! Result output for querycalc

mod writer;

pub use writer::{ResultWriter, FRACTION_DIGITS};
