//! Ranked join over the two indexes
//!
//! Walks `AGroupIndex` in ascending `a` order. Because `a` only grows, the
//! first B×C entry with `b + c > a` only moves right, so a single cursor
//! into `BcJoinIndex` serves the whole walk and each score is
//! `total_x * suffix_sum` at the cursor.
//!
//! Once the best set is full, a row scoring below the k-th best score
//! triggers a bound check: every remaining row has `total_x` inside the
//! current entry's suffix envelope and a B×C sum inside the envelope at the
//! cursor (or 0, once the cursor runs off the end). If no product of those
//! two ranges can reach the k-th best score, the walk stops.

use std::cmp::Ordering;

use crate::join::{canonical_f64, AGroupIndex, BcJoinIndex, Envelope};

use super::best_set::BestSet;
use super::result::{RankedResult, RankedRow};

/// Number of rows the query returns
pub const DEFAULT_LIMIT: usize = 10;

/// Computes the top rows of the query from prebuilt indexes.
pub struct RankedJoinEngine<'a> {
    bc: &'a BcJoinIndex,
    limit: usize,
}

impl<'a> RankedJoinEngine<'a> {
    /// Creates an engine returning the top `limit` rows
    pub fn with_limit(bc: &'a BcJoinIndex, limit: usize) -> Self {
        Self { bc, limit }
    }

    /// Scores the `a` groups and returns the ranked rows.
    ///
    /// Deterministic: same indexes, same result.
    pub fn execute(&self, groups: &AGroupIndex) -> RankedResult {
        let entries = groups.entries();
        let mut result = RankedResult {
            group_count: entries.len(),
            ..RankedResult::default()
        };
        if self.limit == 0 {
            return result;
        }

        let mut best = BestSet::new(self.limit);
        let bc_len = self.bc.len();
        let mut cursor = 0;

        for entry in entries {
            cursor = self
                .bc
                .first_index_with_key_greater_than(entry.a_value, cursor, bc_len);
            // -0.0 ties with 0.0; a NaN score ranks above every number
            let sum_xyz = canonical_f64(entry.total_x * self.bc.sum_yz_above(cursor));
            result.scanned_count += 1;

            let row = RankedRow::new(entry.a_value, sum_xyz, entry.row_number);
            if !best.is_full() {
                best.insert(row);
                continue;
            }

            let kth_best = best.kth_best();
            if sum_xyz.total_cmp(&kth_best) != Ordering::Less {
                best.insert(row);
                continue;
            }

            let bound = remaining_upper_bound(
                entry.total_x_envelope(),
                self.bc.envelope_above(cursor),
            );
            if bound < kth_best {
                result.pruned = true;
                break;
            }
        }

        result.rows = best.into_ranked(self.limit);
        result
    }
}

/// Upper bound on `total_x * sum` for `total_x` in `total_x` and `sum` in
/// `suffix_sums` widened to include 0.
///
/// The maximum of a product over two independent ranges sits on one of the
/// four corners; any of the four can win once signs are mixed. Returns
/// `+inf` if a corner is NaN.
pub fn remaining_upper_bound(total_x: Envelope, suffix_sums: Envelope) -> f64 {
    let sums = suffix_sums.including(0.0);
    let corners = [
        total_x.min * sums.min,
        total_x.min * sums.max,
        total_x.max * sums.min,
        total_x.max * sums.max,
    ];

    if corners.iter().any(|corner| corner.is_nan()) {
        return f64::INFINITY;
    }
    corners.into_iter().fold(f64::NEG_INFINITY, f64::max)
}
