// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by the enumerator while it walks the table.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Frontier states popped and expanded.
    StatesExpanded,
    /// Child states pushed onto the frontier.
    ChildrenPushed,
    /// Solutions handed back to the caller.
    SolutionsEmitted,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
    peak_frontier: usize,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub(crate) fn increment(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    pub(crate) fn observe_frontier(&mut self, depth: usize) {
        self.peak_frontier = self.peak_frontier.max(depth);
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Largest number of pending frontier states seen at once.
    pub fn peak_frontier(&self) -> usize {
        self.peak_frontier
    }
}
