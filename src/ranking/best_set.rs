//! Bounded set of the best score groups
//!
//! Holds at most `capacity` distinct scores, each with every row that
//! produced it. Groups are kept sorted by descending score in a small
//! vector; with a capacity this low, `partition_point` plus an in-place
//! insert beats any tree.

use std::cmp::Ordering;

use super::result::RankedRow;

#[derive(Debug)]
struct ScoreGroup {
    score: f64,
    members: Vec<RankedRow>,
}

/// Best `capacity` score groups seen so far
#[derive(Debug)]
pub struct BestSet {
    capacity: usize,
    /// Descending by score under `f64::total_cmp`
    groups: Vec<ScoreGroup>,
}

impl BestSet {
    /// Creates an empty set holding up to `capacity` distinct scores
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            groups: Vec::with_capacity(capacity + 1),
        }
    }

    /// Returns true once `capacity` distinct scores are retained
    pub fn is_full(&self) -> bool {
        self.groups.len() >= self.capacity
    }

    /// Smallest retained score once full, `-inf` before that
    pub fn kth_best(&self) -> f64 {
        match self.groups.last() {
            Some(group) if self.is_full() => group.score,
            _ => f64::NEG_INFINITY,
        }
    }

    /// Adds a row under its score.
    ///
    /// A row whose score is already retained joins that group. A new score
    /// opens a group; if that exceeds the capacity the lowest group is
    /// evicted, which may be the new group itself.
    pub fn insert(&mut self, row: RankedRow) {
        if self.capacity == 0 {
            return;
        }

        let score = row.sum_xyz;
        let pos = self
            .groups
            .partition_point(|group| group.score.total_cmp(&score) == Ordering::Greater);

        let existing = self
            .groups
            .get(pos)
            .is_some_and(|group| group.score.total_cmp(&score) == Ordering::Equal);

        if existing {
            self.groups[pos].members.push(row);
            return;
        }

        self.groups.insert(
            pos,
            ScoreGroup {
                score,
                members: vec![row],
            },
        );
        if self.groups.len() > self.capacity {
            self.groups.pop();
        }
    }

    /// Flattens the groups in descending score order, members by row
    /// number, keeping at most `limit` rows.
    pub fn into_ranked(self, limit: usize) -> Vec<RankedRow> {
        let mut rows = Vec::with_capacity(limit);
        for mut group in self.groups {
            if rows.len() >= limit {
                break;
            }
            group.members.sort_by_key(|row| row.row_number);
            let take = limit - rows.len();
            rows.extend(group.members.into_iter().take(take));
        }
        rows
    }
}
