// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! One `bool` per cell, row-major.

use super::storage::CellStorage;

#[derive(Debug, Clone)]
pub struct ByteCells {
    cells: Vec<bool>,
    cols: usize,
}

impl ByteCells {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![false; rows * cols],
            cols,
        }
    }
}

impl CellStorage for ByteCells {
    fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize) {
        self.cells[row * self.cols + col] = true;
    }

    fn copy_row(&mut self, from: usize, to: usize) {
        let start = from * self.cols;
        self.cells.copy_within(start..start + self.cols, to * self.cols);
    }

    fn memory_bytes(&self) -> usize {
        self.cells.len()
    }
}
