//! Result types for ranked execution

/// A single output row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedRow {
    pub a_value: f64,
    /// SUM(x * y * z) over the B×C pairs with `b + c > a`
    pub sum_xyz: f64,
    /// First-occurrence ordinal of `a`, used only to break ties
    pub row_number: u32,
}

impl RankedRow {
    pub fn new(a_value: f64, sum_xyz: f64, row_number: u32) -> Self {
        Self {
            a_value,
            sum_xyz,
            row_number,
        }
    }
}

/// Result of ranked execution
#[derive(Debug, Clone, Default)]
pub struct RankedResult {
    /// Rows in output order
    pub rows: Vec<RankedRow>,
    /// Number of `a` groups scored before the scan ended
    pub scanned_count: usize,
    /// Number of `a` groups in the input
    pub group_count: usize,
    /// Whether the pruning bound ended the scan early
    pub pruned: bool,
}

impl RankedResult {
    /// Returns true if no rows were produced
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &RankedRow> {
        self.rows.iter()
    }
}
