//! T1 grouped by distinct `a`
//!
//! Built in one streaming pass. Groups are numbered in order of first
//! appearance, then sorted by `a` and annotated with the range of
//! `total_x` over each entry and every entry after it.

use std::collections::HashMap;

use super::bc_index::{canonical_f64, Envelope};
use crate::tuples::{PairSource, TupleError, TupleResult};

/// One distinct `a` value of T1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AEntry {
    /// Ordinal of the first occurrence among distinct `a` values
    pub row_number: u32,
    pub a_value: f64,
    /// SUM(x) over the rows sharing this `a`
    pub total_x: f64,
    /// min(total_x) for this entry and those with a higher `a`
    pub suffix_min_total_x: f64,
    /// max(total_x) for this entry and those with a higher `a`
    pub suffix_max_total_x: f64,
}

impl AEntry {
    /// Range of `total_x` over this entry and every later entry
    pub fn total_x_envelope(&self) -> Envelope {
        Envelope {
            min: self.suffix_min_total_x,
            max: self.suffix_max_total_x,
        }
    }
}

/// Distinct `a` groups in ascending `a` order.
#[derive(Debug, Default)]
pub struct AGroupIndex {
    entries: Vec<AEntry>,
}

impl AGroupIndex {
    /// Consumes `source` once, merging rows that share an `a` value.
    ///
    /// Values are grouped by bit pattern after canonicalization, so `-0.0`
    /// joins `0.0` and every NaN forms one group sorted after all numbers.
    ///
    /// # Errors
    ///
    /// Propagates source errors. Fails with `CountTooLarge` if the number
    /// of distinct values does not fit a `u32` row number.
    pub fn build<S: PairSource>(source: &mut S) -> TupleResult<Self> {
        // (row_number, a, total_x), indexed by row_number
        let mut groups: Vec<(u32, f64, f64)> = Vec::new();
        let mut by_bits: HashMap<u64, usize> = HashMap::with_capacity(source.declared_count() / 2);

        while let Some((a, x)) = source.next_pair()? {
            let a = canonical_f64(a);
            let slot = match by_bits.get(&a.to_bits()) {
                Some(&slot) => slot,
                None => {
                    let row_number =
                        u32::try_from(groups.len()).map_err(|_| TupleError::CountTooLarge {
                            declared: groups.len() + 1,
                            limit: u32::MAX as usize,
                        })?;
                    groups.push((row_number, a, 0.0));
                    by_bits.insert(a.to_bits(), groups.len() - 1);
                    groups.len() - 1
                }
            };
            groups[slot].2 += x;
        }
        drop(by_bits);

        groups.sort_unstable_by(|l, r| l.1.total_cmp(&r.1));

        let mut entries = Vec::with_capacity(groups.len());
        let mut envelope = Envelope::EMPTY;
        for &(row_number, a_value, total_x) in groups.iter().rev() {
            envelope = envelope.including(total_x);
            entries.push(AEntry {
                row_number,
                a_value,
                total_x,
                suffix_min_total_x: envelope.min,
                suffix_max_total_x: envelope.max,
            });
        }
        entries.reverse();

        Ok(Self { entries })
    }

    /// Number of distinct `a` values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending `a` order
    pub fn entries(&self) -> &[AEntry] {
        &self.entries
    }
}
