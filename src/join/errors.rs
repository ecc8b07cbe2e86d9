//! Join index build errors

use std::fmt;

use thiserror::Error;

use crate::tuples::TupleError;

/// Result type for join index construction
pub type JoinResult<T> = Result<T, JoinError>;

/// The two inputs of the B×C cross join
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinSide {
    /// Streamed side (T2)
    B,
    /// Buffered side (T3)
    C,
}

impl fmt::Display for JoinSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoinSide::B => write!(f, "B"),
            JoinSide::C => write!(f, "C"),
        }
    }
}

/// A source failure while building the B×C index
#[derive(Debug, Error)]
#[error("{side} side of the join: {source}")]
pub struct JoinError {
    pub side: JoinSide,
    #[source]
    pub source: TupleError,
}

impl JoinError {
    pub fn new(side: JoinSide, source: TupleError) -> Self {
        Self { side, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_side() {
        let err = JoinError::new(JoinSide::C, TupleError::MissingCount);
        assert!(err.to_string().starts_with("C side"));
    }
}
