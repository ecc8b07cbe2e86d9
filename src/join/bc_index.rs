//! Materialized B×C join sorted by `b + c`
//!
//! Every (b, c) combination becomes one entry keyed by `b + c` and weighted
//! by `y * z`. After sorting, each entry caches:
//! - `suffix_sum`: SUM(y * z) over its key and every larger key
//! - `suffix_min` / `suffix_max`: the range of `suffix_sum` over its key
//!   and every larger key
//!
//! Entries sharing a key form a tie-group and carry identical suffix values,
//! so "sum of weights with key > t" is one lookup plus one field read.

use std::cmp::Ordering;

use super::errors::{JoinError, JoinResult, JoinSide};
use crate::tuples::PairSource;

/// One (b, c) combination of the cross join.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BcEntry {
    /// b + c
    pub key: f64,
    /// y * z
    pub weight: f64,
    /// SUM(y * z) for this key and all larger keys
    pub suffix_sum: f64,
    /// min(suffix_sum) for this key and all larger keys
    pub suffix_min: f64,
    /// max(suffix_sum) for this key and all larger keys
    pub suffix_max: f64,
}

/// Inclusive range of achievable values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub min: f64,
    pub max: f64,
}

impl Envelope {
    /// Range containing no value: `(+inf, -inf)`
    pub const EMPTY: Envelope = Envelope {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    /// Returns the smallest envelope containing `self` and `value`.
    ///
    /// NaN is sticky: once included, both bounds stay NaN.
    pub fn including(self, value: f64) -> Self {
        if value.is_nan() || self.min.is_nan() {
            return Self {
                min: f64::NAN,
                max: f64::NAN,
            };
        }
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }
}

/// Sorted B×C join with cached suffix aggregates.
#[derive(Debug, Default)]
pub struct BcJoinIndex {
    entries: Vec<BcEntry>,
}

impl BcJoinIndex {
    /// Builds the index from the two join sides.
    ///
    /// The C side is buffered in full, then the B side is streamed once,
    /// pairing every B row with every buffered C row.
    ///
    /// # Errors
    ///
    /// Propagates any error raised by either source, tagged with its side.
    pub fn build<B: PairSource, C: PairSource>(b_side: &mut B, c_side: &mut C) -> JoinResult<Self> {
        let mut c_rows = Vec::with_capacity(c_side.declared_count());
        while let Some(pair) = c_side
            .next_pair()
            .map_err(|source| JoinError::new(JoinSide::C, source))?
        {
            c_rows.push(pair);
        }

        // Grows with the B rows actually read; the declared count is unchecked
        // until the stream ends.
        let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(c_rows.len());
        while let Some((b, y)) = b_side
            .next_pair()
            .map_err(|source| JoinError::new(JoinSide::B, source))?
        {
            pairs.extend(c_rows.iter().map(|&(c, z)| (canonical_f64(b + c), y * z)));
        }
        drop(c_rows);

        pairs.sort_unstable_by(|l, r| l.0.total_cmp(&r.0));

        Ok(Self {
            entries: with_suffix_aggregates(&pairs),
        })
    }

    /// Number of (b, c) combinations
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if either join side was empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending key order
    pub fn entries(&self) -> &[BcEntry] {
        &self.entries
    }

    /// Returns the first index in `[from, to)` whose key is strictly
    /// greater than `threshold`, or `to` if there is none.
    ///
    /// An exact match skips its whole tie-group. Callers walking an
    /// ascending sequence of thresholds pass the previous result as `from`
    /// so the searched window only shrinks.
    pub fn first_index_with_key_greater_than(
        &self,
        threshold: f64,
        from: usize,
        to: usize,
    ) -> usize {
        let to = to.min(self.entries.len());
        let from = from.min(to);
        let threshold = canonical_f64(threshold);
        from + self.entries[from..to]
            .partition_point(|entry| entry.key.total_cmp(&threshold) != Ordering::Greater)
    }

    /// SUM(y * z) over every entry at or after `index`; 0 past the end
    pub fn sum_yz_above(&self, index: usize) -> f64 {
        self.entries.get(index).map_or(0.0, |entry| entry.suffix_sum)
    }

    /// Range of suffix sums at or after `index`; `Envelope::EMPTY` past the end
    pub fn envelope_above(&self, index: usize) -> Envelope {
        self.entries.get(index).map_or(Envelope::EMPTY, |entry| Envelope {
            min: entry.suffix_min,
            max: entry.suffix_max,
        })
    }
}

/// Folds `-0.0` into `0.0` and every NaN into `f64::NAN`.
///
/// After this, `total_cmp` agrees with `<` on zero and places NaN above
/// every number regardless of the sign bit it was produced with.
pub(crate) fn canonical_f64(value: f64) -> f64 {
    if value.is_nan() {
        f64::NAN
    } else {
        value + 0.0
    }
}

/// Derives the immutable entries from `(key, weight)` pairs sorted by key.
///
/// Single right-to-left scan over tie-groups: each group is summed, then
/// the running sum and the running envelope are written to all its members.
fn with_suffix_aggregates(pairs: &[(f64, f64)]) -> Vec<BcEntry> {
    let n = pairs.len();
    let mut suffix_sums = vec![0.0; n];
    let mut envelopes = vec![Envelope::EMPTY; n];

    let mut running_sum = 0.0;
    let mut envelope = Envelope::EMPTY;
    let mut end = n;
    while end > 0 {
        let key = pairs[end - 1].0;
        let mut start = end - 1;
        while start > 0 && pairs[start - 1].0.total_cmp(&key) == Ordering::Equal {
            start -= 1;
        }

        running_sum += pairs[start..end].iter().map(|&(_, weight)| weight).sum::<f64>();
        envelope = envelope.including(running_sum);

        suffix_sums[start..end].fill(running_sum);
        envelopes[start..end].fill(envelope);
        end = start;
    }

    pairs
        .iter()
        .zip(suffix_sums)
        .zip(envelopes)
        .map(|((&(key, weight), suffix_sum), envelope)| BcEntry {
            key,
            weight,
            suffix_sum,
            suffix_min: envelope.min,
            suffix_max: envelope.max,
        })
        .collect()
}
