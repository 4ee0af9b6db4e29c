// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver configuration.
//!
//! The defaults are what the command-line tool uses: a bit-packed table
//! with trailing rows trimmed.
//!
//! ```
//! use subset_sum::config::{SolverOptions, TableStorage};
//!
//! let options = SolverOptions::builder()
//!     .storage(TableStorage::Bytes)
//!     .trim_rows(false)
//!     .build();
//! assert_eq!(options.storage, TableStorage::Bytes);
//! assert!(!options.trim_rows);
//! ```

use std::fmt;
use std::str::FromStr;

/// How the reachability table stores its cells.
///
/// Both layouts answer exactly the same reachability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableStorage {
    /// One bit per cell, packed into `u64` words per row.
    #[default]
    Bits,
    /// One `bool` per cell.
    Bytes,
}

impl fmt::Display for TableStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableStorage::Bits => write!(f, "bits"),
            TableStorage::Bytes => write!(f, "bytes"),
        }
    }
}

impl FromStr for TableStorage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bits" => Ok(TableStorage::Bits),
            "bytes" => Ok(TableStorage::Bytes),
            other => Err(format!("unknown table storage '{}' (expected bits or bytes)", other)),
        }
    }
}

/// Options controlling how a [`Solver`](crate::Solver) builds its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverOptions {
    /// Cell layout of the reachability table.
    pub storage: TableStorage,

    /// Drop the largest values when they cannot take part in any subset
    /// reaching the target.
    pub trim_rows: bool,
}

impl SolverOptions {
    pub fn builder() -> SolverOptionsBuilder {
        SolverOptionsBuilder::new()
    }
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            storage: TableStorage::Bits,
            trim_rows: true,
        }
    }
}

/// Consuming builder for [`SolverOptions`].
#[derive(Debug, Default)]
pub struct SolverOptionsBuilder {
    options: SolverOptions,
}

impl SolverOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage(mut self, storage: TableStorage) -> Self {
        self.options.storage = storage;
        self
    }

    pub fn trim_rows(mut self, trim_rows: bool) -> Self {
        self.options.trim_rows = trim_rows;
        self
    }

    pub fn build(self) -> SolverOptions {
        self.options
    }
}
