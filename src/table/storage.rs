// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell storage behind the reachability table.

use std::fmt::Debug;

use super::bits::BitCells;
use super::bytes::ByteCells;
use crate::config::TableStorage;

/// A rows-by-columns grid of booleans, all initially false.
///
/// Implementations differ only in memory footprint and access cost.
pub trait CellStorage: Debug {
    fn get(&self, row: usize, col: usize) -> bool;

    fn set(&mut self, row: usize, col: usize);

    /// Overwrite row `to` with the contents of row `from`.
    fn copy_row(&mut self, from: usize, to: usize);

    /// Bytes held by the grid.
    fn memory_bytes(&self) -> usize;
}

/// Allocate an empty grid with the requested layout.
pub fn allocate(storage: TableStorage, rows: usize, cols: usize) -> Box<dyn CellStorage> {
    match storage {
        TableStorage::Bits => Box::new(BitCells::new(rows, cols)),
        TableStorage::Bytes => Box::new(ByteCells::new(rows, cols)),
    }
}
