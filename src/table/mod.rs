// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dynamic-programming reachability table.
//!
//! Cell `(i, j)` is true exactly when some non-empty subset of the sorted
//! values `0..=i` sums to `offset + j`. The table is built once and only
//! read afterwards.
//!
//! # Recurrence
//!
//! - Row 0 marks the single column equal to the first value.
//! - Row `i` starts as a copy of row `i - 1`, then marks the column equal
//!   to value `i` on its own, and every column `j` whose column
//!   `j - value[i]` was reachable in row `i - 1`.
//!
//! Columns only cover `[offset, target]`. Sums outside that window never
//! lead back into it: values are sorted, so a negative value is only ever
//! added to other negatives.
//!
//! # Example
//!
//! ```
//! use subset_sum::config::{SolverOptions, TableStorage};
//! use subset_sum::normalize::normalize;
//! use subset_sum::table::ReachabilityTable;
//!
//! let problem = normalize(&[1, 2, 3], 6, &SolverOptions::default()).unwrap();
//! let table = ReachabilityTable::build(&problem, TableStorage::Bits);
//! assert!(table.has_solution());
//! assert!(table.is_reachable(1, 3)); // 1 + 2
//! assert!(!table.is_reachable(0, 2));
//! ```

pub mod bits;
pub mod bytes;
pub mod storage;

pub use bits::BitCells;
pub use bytes::ByteCells;
pub use storage::CellStorage;

use crate::config::TableStorage;
use crate::normalize::NormalizedProblem;
use tracing::debug;

#[derive(Debug)]
pub struct ReachabilityTable {
    cells: Box<dyn CellStorage>,
    rows: usize,
    width: usize,
}

impl ReachabilityTable {
    /// Fill the table for the active values of `problem`.
    pub fn build(problem: &NormalizedProblem, layout: TableStorage) -> Self {
        let rows = problem.active;
        let width = problem.width;
        let values = problem.active_values();
        let mut cells = storage::allocate(layout, rows, width);

        if let Some(col) = problem.column_of(values[0]) {
            cells.set(0, col);
        }

        for (row, &value) in values.iter().enumerate().skip(1) {
            cells.copy_row(row - 1, row);

            if let Some(col) = problem.column_of(value) {
                cells.set(row, col);
            }
            for col in 0..width {
                let previous = col as i64 - value;
                if previous >= 0
                    && (previous as usize) < width
                    && cells.get(row - 1, previous as usize)
                {
                    cells.set(row, col);
                }
            }
        }

        let table = Self { cells, rows, width };
        debug!(
            rows,
            width,
            %layout,
            bytes = table.memory_bytes(),
            has_solution = table.has_solution(),
            "built reachability table"
        );
        table
    }

    /// Whether a non-empty subset of values `0..=row` sums to column `col`.
    pub fn is_reachable(&self, row: usize, col: usize) -> bool {
        self.cells.get(row, col)
    }

    /// Whether the target column is reachable using every active value.
    pub fn has_solution(&self) -> bool {
        self.cells.get(self.rows - 1, self.width - 1)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn memory_bytes(&self) -> usize {
        self.cells.memory_bytes()
    }
}
