// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Resumable enumeration of every subset reaching the target.
//!
//! The enumerator walks the reachability table backwards from the target
//! cell using an explicit LIFO frontier. The frontier is the suspended
//! state of the walk, so each call to [`SolutionEnumerator::next_solution`]
//! picks up where the previous one stopped.
//!
//! # Expansion
//!
//! Popping a state at `(row, col)` pushes up to two children:
//!
//! 1. If `(row - 1, col)` is reachable, the value at `row` is left out
//!    and `row - 1` becomes the tentative choice for the same column.
//! 2. If `(row - 1, col - value[row])` is reachable, the value at `row`
//!    is kept and the remainder is sought among rows `0..row`.
//!
//! The popped state itself is a solution when its residual is zero: the
//! tentative value at `row` completes the sum with nothing else below it.
//! These three cases partition the subsets the state stands for, so every
//! solution is produced exactly once. Every push lowers `row`, so the walk
//! terminates.
//!
//! # States
//!
//! - `Uninitialized`: `initialize` has not been called.
//! - `Ready`: the frontier may still hold solutions.
//! - `Exhausted`: the frontier is empty. This persists until the next
//!   `initialize`.

pub mod frontier;

pub use frontier::FrontierState;

use crate::normalize::NormalizedProblem;
use crate::statistics::{Counters, Statistics};
use crate::table::ReachabilityTable;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumeratorState {
    Uninitialized,
    Ready,
    Exhausted,
}

#[derive(Debug)]
pub struct SolutionEnumerator {
    state: EnumeratorState,
    frontier: Vec<FrontierState>,
    statistics: Statistics,
}

impl SolutionEnumerator {
    pub fn new() -> Self {
        Self {
            state: EnumeratorState::Uninitialized,
            frontier: Vec::new(),
            statistics: Statistics::new(),
        }
    }

    /// Restart from the target cell, discarding any walk in progress.
    pub fn initialize(&mut self, problem: &NormalizedProblem, table: &ReachabilityTable) {
        self.frontier.clear();
        self.statistics = Statistics::new();

        if !table.has_solution() {
            self.state = EnumeratorState::Exhausted;
            return;
        }

        let row = table.rows() - 1;
        let col = table.width() - 1;
        self.frontier.push(FrontierState::seed(
            row,
            col,
            problem.target,
            problem.values[row],
        ));
        self.statistics.observe_frontier(1);
        self.state = EnumeratorState::Ready;
    }

    /// Mark the enumeration finished without walking anything.
    ///
    /// Used for problems rejected before a table exists.
    pub fn exhaust(&mut self) {
        self.frontier.clear();
        self.state = EnumeratorState::Exhausted;
    }

    /// Produce the next solution as ascending original indices.
    ///
    /// Returns `None` once every solution has been produced, and on every
    /// later call. Also returns `None` before [`initialize`](Self::initialize).
    pub fn next_solution(
        &mut self,
        problem: &NormalizedProblem,
        table: &ReachabilityTable,
    ) -> Option<Vec<usize>> {
        if self.state != EnumeratorState::Ready {
            return None;
        }

        while let Some(state) = self.frontier.pop() {
            self.statistics.increment(Counters::StatesExpanded);
            self.expand(&state, problem, table);

            if state.is_complete() {
                self.statistics.increment(Counters::SolutionsEmitted);
                let solution = problem.permutation.remap(&state.taken);
                trace!(
                    positions = ?state.taken,
                    indices = ?solution,
                    pending = self.frontier.len(),
                    "emitting solution"
                );
                return Some(solution);
            }
        }

        trace!(
            expanded = self.statistics.get(Counters::StatesExpanded),
            "enumeration exhausted"
        );
        self.state = EnumeratorState::Exhausted;
        None
    }

    fn expand(
        &mut self,
        state: &FrontierState,
        problem: &NormalizedProblem,
        table: &ReachabilityTable,
    ) {
        if state.row == 0 {
            return;
        }
        let below = state.row - 1;
        let value = problem.values[state.row];
        let previous_value = problem.values[below];

        if table.is_reachable(below, state.col) {
            self.push(state.substitute(value, previous_value));
        }

        let remainder = state.col as i64 - value;
        if remainder >= 0
            && (remainder as usize) < table.width()
            && table.is_reachable(below, remainder as usize)
        {
            self.push(state.extend(remainder as usize, previous_value));
        }
    }

    fn push(&mut self, state: FrontierState) {
        self.frontier.push(state);
        self.statistics.increment(Counters::ChildrenPushed);
        self.statistics.observe_frontier(self.frontier.len());
    }

    pub fn state(&self) -> EnumeratorState {
        self.state
    }

    /// Number of pending frontier states.
    pub fn pending(&self) -> usize {
        self.frontier.len()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl Default for SolutionEnumerator {
    fn default() -> Self {
        Self::new()
    }
}
