//! Pair sources
//!
//! A pair source yields `(v1, v2)` rows of a two-column table exactly once,
//! with the row count known before the first row is read.

use super::errors::TupleResult;

/// Sequential, finite producer of two-column rows
pub trait PairSource {
    /// Number of rows the source declares up front
    fn declared_count(&self) -> usize;

    /// Returns the next row, or `None` once every declared row was read.
    ///
    /// Returns `Err` if the underlying data is malformed or unreadable.
    fn next_pair(&mut self) -> TupleResult<Option<(f64, f64)>>;
}

/// A pair source over rows already held in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pairs: Vec<(f64, f64)>,
    position: usize,
}

impl MemorySource {
    /// Creates a source yielding `pairs` in order
    pub fn new(pairs: Vec<(f64, f64)>) -> Self {
        Self { pairs, position: 0 }
    }
}

impl PairSource for MemorySource {
    fn declared_count(&self) -> usize {
        self.pairs.len()
    }

    fn next_pair(&mut self) -> TupleResult<Option<(f64, f64)>> {
        let pair = self.pairs.get(self.position).copied();
        if pair.is_some() {
            self.position += 1;
        }
        Ok(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_yields_in_order() {
        let mut source = MemorySource::new(vec![(1.0, 2.0), (3.0, 4.0)]);
        assert_eq!(source.declared_count(), 2);
        assert_eq!(source.next_pair().unwrap(), Some((1.0, 2.0)));
        assert_eq!(source.next_pair().unwrap(), Some((3.0, 4.0)));
        assert_eq!(source.next_pair().unwrap(), None);
        assert_eq!(source.next_pair().unwrap(), None);
    }

    #[test]
    fn test_empty_source() {
        let mut source = MemorySource::new(Vec::new());
        assert_eq!(source.declared_count(), 0);
        assert!(source.next_pair().unwrap().is_none());
    }
}
