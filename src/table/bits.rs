// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bit-packed cell grid.
//!
//! Each row is `cols.div_ceil(64)` words long and all rows live in one
//! contiguous buffer. Bit `c % 64` of word `c / 64` holds column `c`.

use super::storage::CellStorage;

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug, Clone)]
pub struct BitCells {
    words: Vec<u64>,
    stride: usize,
}

impl BitCells {
    pub fn new(rows: usize, cols: usize) -> Self {
        let stride = cols.div_ceil(WORD_BITS);
        Self {
            words: vec![0; rows * stride],
            stride,
        }
    }

    fn row_range(&self, row: usize) -> std::ops::Range<usize> {
        let start = row * self.stride;
        start..start + self.stride
    }
}

impl CellStorage for BitCells {
    fn get(&self, row: usize, col: usize) -> bool {
        let word = self.words[row * self.stride + col / WORD_BITS];
        (word >> (col % WORD_BITS)) & 1 != 0
    }

    fn set(&mut self, row: usize, col: usize) {
        self.words[row * self.stride + col / WORD_BITS] |= 1u64 << (col % WORD_BITS);
    }

    fn copy_row(&mut self, from: usize, to: usize) {
        let source = self.row_range(from);
        let dest = self.row_range(to).start;
        self.words.copy_within(source, dest);
    }

    fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_round_up_to_words() {
        assert_eq!(BitCells::new(3, 1).memory_bytes(), 3 * 8);
        assert_eq!(BitCells::new(3, 64).memory_bytes(), 3 * 8);
        assert_eq!(BitCells::new(3, 65).memory_bytes(), 3 * 16);
    }

    #[test]
    fn test_set_get_across_word_boundary() {
        let mut cells = BitCells::new(2, 130);
        cells.set(1, 63);
        cells.set(1, 64);
        cells.set(0, 129);

        assert!(cells.get(1, 63));
        assert!(cells.get(1, 64));
        assert!(!cells.get(1, 65));
        assert!(cells.get(0, 129));
        assert!(!cells.get(1, 129));
    }

    #[test]
    fn test_copy_row() {
        let mut cells = BitCells::new(3, 70);
        cells.set(0, 2);
        cells.set(0, 69);
        cells.set(1, 5);
        cells.copy_row(0, 1);

        assert!(cells.get(1, 2));
        assert!(cells.get(1, 69));
        assert!(!cells.get(1, 5));
        assert!(!cells.get(2, 2));
    }
}
