//! Ranking Property Tests
//!
//! Randomized checks of the ranked join against a brute-force evaluation:
//! - Engine output equals the nested-loop result
//! - The monotone cursor agrees with a full-range search
//! - The pruning bound is never below an achievable score
//!
//! Values are small integers so every sum is exact and order-independent.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use querycalc::join::{AGroupIndex, BcJoinIndex, Envelope};
use querycalc::ranking::{remaining_upper_bound, RankedJoinEngine, DEFAULT_LIMIT};
use querycalc::tuples::MemorySource;

// =============================================================================
// Helper Functions
// =============================================================================

fn random_table(
    rng: &mut StdRng,
    rows: std::ops::Range<usize>,
    keys: i32,
    values: i32,
) -> Vec<(f64, f64)> {
    let rows = rng.gen_range(rows);
    (0..rows)
        .map(|_| {
            (
                rng.gen_range(-keys..=keys) as f64,
                rng.gen_range(-values..=values) as f64,
            )
        })
        .collect()
}

/// Nested-loop evaluation: (a, sum_xyz, row_number) in final order.
fn brute_force(
    t1: &[(f64, f64)],
    t2: &[(f64, f64)],
    t3: &[(f64, f64)],
    limit: usize,
) -> Vec<(f64, f64, u32)> {
    let mut groups: Vec<(f64, f64)> = Vec::new();
    for &(a, x) in t1 {
        match groups.iter_mut().find(|(value, _)| *value == a) {
            Some(group) => group.1 += x,
            None => groups.push((a, x)),
        }
    }

    let mut rows: Vec<(f64, f64, u32)> = groups
        .iter()
        .enumerate()
        .map(|(row, &(a, total_x))| {
            let mut sum = 0.0;
            for &(b, y) in t2 {
                for &(c, z) in t3 {
                    if a < b + c {
                        sum += total_x * y * z;
                    }
                }
            }
            (a, sum + 0.0, row as u32)
        })
        .collect();

    rows.sort_by(|l, r| match r.1.total_cmp(&l.1) {
        Ordering::Equal => l.2.cmp(&r.2),
        other => other,
    });
    rows.truncate(limit);
    rows
}

fn engine(
    t1: &[(f64, f64)],
    t2: &[(f64, f64)],
    t3: &[(f64, f64)],
    limit: usize,
) -> Vec<(f64, f64, u32)> {
    let mut b_side = MemorySource::new(t2.to_vec());
    let mut c_side = MemorySource::new(t3.to_vec());
    let bc = BcJoinIndex::build(&mut b_side, &mut c_side).unwrap();
    let groups = AGroupIndex::build(&mut MemorySource::new(t1.to_vec())).unwrap();
    RankedJoinEngine::with_limit(&bc, limit)
        .execute(&groups)
        .iter()
        .map(|r| (r.a_value, r.sum_xyz, r.row_number))
        .collect()
}

// =============================================================================
// Engine vs Brute Force
// =============================================================================

/// Mixed signs, many duplicates, default limit.
#[test]
fn test_matches_brute_force_mixed_signs() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let t1 = random_table(&mut rng, 0..40, 10, 5);
        let t2 = random_table(&mut rng, 0..8, 6, 4);
        let t3 = random_table(&mut rng, 0..8, 6, 4);

        assert_eq!(
            engine(&t1, &t2, &t3, DEFAULT_LIMIT),
            brute_force(&t1, &t2, &t3, DEFAULT_LIMIT),
            "t1={:?} t2={:?} t3={:?}",
            t1,
            t2,
            t3
        );
    }
}

/// Non-negative data, where pruning fires most often.
#[test]
fn test_matches_brute_force_non_negative() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..300 {
        let t1: Vec<(f64, f64)> = random_table(&mut rng, 0..60, 30, 5)
            .into_iter()
            .map(|(a, x)| (a, x.abs()))
            .collect();
        let t2: Vec<(f64, f64)> = random_table(&mut rng, 0..6, 15, 3)
            .into_iter()
            .map(|(b, y)| (b, y.abs()))
            .collect();
        let t3: Vec<(f64, f64)> = random_table(&mut rng, 0..6, 15, 3)
            .into_iter()
            .map(|(c, z)| (c, z.abs()))
            .collect();

        assert_eq!(engine(&t1, &t2, &t3, DEFAULT_LIMIT), brute_force(&t1, &t2, &t3, DEFAULT_LIMIT));
    }
}

/// Few distinct scores, so ties straddle the limit.
#[test]
fn test_matches_brute_force_heavy_ties() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..300 {
        let t1 = random_table(&mut rng, 0..50, 25, 1);
        let t2 = random_table(&mut rng, 0..4, 3, 1);
        let t3 = random_table(&mut rng, 0..4, 3, 1);
        let limit = rng.gen_range(1..=12);

        assert_eq!(engine(&t1, &t2, &t3, limit), brute_force(&t1, &t2, &t3, limit));
    }
}

// =============================================================================
// Cursor Tests
// =============================================================================

/// The window-restricted lookup agrees with a search over the whole index.
#[test]
fn test_monotone_cursor_matches_full_search() {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..100 {
        let t1 = random_table(&mut rng, 1..40, 20, 3);
        let t2 = random_table(&mut rng, 1..8, 10, 3);
        let t3 = random_table(&mut rng, 1..8, 10, 3);

        let bc =
            BcJoinIndex::build(&mut MemorySource::new(t2), &mut MemorySource::new(t3)).unwrap();
        let groups = AGroupIndex::build(&mut MemorySource::new(t1)).unwrap();
        let n = bc.len();

        let mut cursor = 0;
        for entry in groups.entries() {
            cursor = bc.first_index_with_key_greater_than(entry.a_value, cursor, n);
            assert_eq!(cursor, bc.first_index_with_key_greater_than(entry.a_value, 0, n));

            let expected: f64 = bc
                .entries()
                .iter()
                .filter(|e| e.key > entry.a_value)
                .map(|e| e.weight)
                .sum();
            assert_eq!(bc.sum_yz_above(cursor), expected);
        }
    }
}

// =============================================================================
// Bound Tests
// =============================================================================

/// Every product of points inside the two ranges stays under the bound.
#[test]
fn test_bound_dominates_sampled_products() {
    let mut rng = StdRng::seed_from_u64(47);
    for _ in 0..1000 {
        let (x1, x2) = (rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let (s1, s2) = (rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let x_range = Envelope::EMPTY.including(x1).including(x2);
        let s_range = Envelope::EMPTY.including(s1).including(s2);
        let bound = remaining_upper_bound(x_range, s_range);

        for _ in 0..20 {
            let x: f64 = rng.gen_range(x_range.min..=x_range.max);
            let s: f64 = rng.gen_range(s_range.min..=s_range.max);
            assert!(x * s <= bound, "x={} s={} bound={}", x, s, bound);
            // past the end of the index the sum is 0
            assert!(x * 0.0 <= bound);
        }
    }
}

/// Both factors negative at their minimum: the min-by-min corner wins.
#[test]
fn test_bound_mixed_sign_corner() {
    let x_range = Envelope { min: 1.0, max: 2.0 };
    let s_range = Envelope { min: -3.0, max: -1.0 };
    assert_eq!(remaining_upper_bound(x_range, s_range), 0.0);

    let x_range = Envelope { min: -4.0, max: -1.0 };
    let s_range = Envelope { min: -3.0, max: 2.0 };
    assert_eq!(remaining_upper_bound(x_range, s_range), 12.0);
}
