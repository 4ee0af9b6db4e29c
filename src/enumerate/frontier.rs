// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pending reconstruction tasks.

/// One pending task of the backward walk over the table.
///
/// The state stands for every non-empty subset of sorted values
/// `0..=row` that sums to column `col`, combined with the positions
/// already fixed in `taken`. The last entry of `taken` is always `row`,
/// tentatively included; `residual` is the target minus the sum of every
/// value in `taken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierState {
    pub row: usize,
    pub col: usize,
    pub taken: Vec<usize>,
    pub residual: i64,
}

impl FrontierState {
    /// The state covering the whole table: target column, last active row.
    pub fn seed(row: usize, col: usize, target: i64, value: i64) -> Self {
        Self {
            row,
            col,
            taken: vec![row],
            residual: target - value,
        }
    }

    /// Replace the tentative value at `row` by the one at `row - 1`,
    /// aiming at the same column.
    pub fn substitute(&self, value: i64, previous_value: i64) -> Self {
        let mut taken = self.taken.clone();
        if let Some(last) = taken.last_mut() {
            *last = self.row - 1;
        }
        Self {
            row: self.row - 1,
            col: self.col,
            taken,
            residual: self.residual + value - previous_value,
        }
    }

    /// Keep the value at `row` and look for the rest of the sum among
    /// rows `0..row`, tentatively taking `row - 1`.
    pub fn extend(&self, col: usize, previous_value: i64) -> Self {
        let mut taken = Vec::with_capacity(self.taken.len() + 1);
        taken.extend_from_slice(&self.taken);
        taken.push(self.row - 1);
        Self {
            row: self.row - 1,
            col,
            taken,
            residual: self.residual - previous_value,
        }
    }

    /// Whether the positions in `taken` already sum to the target.
    pub fn is_complete(&self) -> bool {
        self.residual == 0
    }
}
