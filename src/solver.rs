// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Public entry point tying normalization, table and enumeration together.
//!
//! # Example
//!
//! ```
//! use subset_sum::Solver;
//!
//! let mut solver = Solver::new(&[3, 34, 4, 12, 5, 2], 9);
//! assert!(solver.has_solution());
//!
//! solver.init_solution_iterator();
//! while let Some(indices) = solver.next_solution() {
//!     let sum: i64 = indices.iter().map(|&i| [3, 34, 4, 12, 5, 2][i]).sum();
//!     assert_eq!(sum, 9);
//! }
//! ```

use crate::config::SolverOptions;
use crate::enumerate::SolutionEnumerator;
use crate::normalize::{normalize, scale_of, Infeasible, NormalizedProblem};
use crate::statistics::Statistics;
use crate::table::ReachabilityTable;
use tracing::debug;

/// Normalized problem and its table, present when normalization succeeded.
#[derive(Debug)]
struct Instance {
    problem: NormalizedProblem,
    table: ReachabilityTable,
}

/// Exact subset-sum solver enumerating every subset that reaches the target.
///
/// Subsets are identified by position, so equal values at different
/// positions give distinct solutions. The empty subset is never reported.
///
/// Only one enumeration is live at a time; calling
/// [`init_solution_iterator`](Self::init_solution_iterator) restarts it.
#[derive(Debug)]
pub struct Solver {
    instance: Option<Instance>,
    infeasible: Option<Infeasible>,
    scale: i64,
    enumerator: SolutionEnumerator,
}

impl Solver {
    /// Build a solver with default options.
    ///
    /// Never fails: a problem without solutions is reported through
    /// [`has_solution`](Self::has_solution). The sum of the absolute values
    /// of `numbers` must fit in an `i64`; larger inputs give unspecified
    /// results.
    pub fn new(numbers: &[i64], target: i64) -> Self {
        Self::with_options(numbers, target, SolverOptions::default())
    }

    pub fn with_options(numbers: &[i64], target: i64, options: SolverOptions) -> Self {
        let (instance, infeasible) = match normalize(numbers, target, &options) {
            Ok(problem) => {
                let table = ReachabilityTable::build(&problem, options.storage);
                let infeasible = (!table.has_solution()).then_some(Infeasible::Unreachable);
                (Some(Instance { problem, table }), infeasible)
            }
            Err(reason) => {
                debug!(%reason, "problem has no solution");
                (None, Some(reason))
            }
        };
        Self {
            instance,
            infeasible,
            scale: scale_of(numbers, target),
            enumerator: SolutionEnumerator::new(),
        }
    }

    /// Whether at least one non-empty subset sums to the target.
    pub fn has_solution(&self) -> bool {
        self.infeasible.is_none()
    }

    /// Why no subset reaches the target, if none does.
    pub fn infeasibility(&self) -> Option<&Infeasible> {
        self.infeasible.as_ref()
    }

    /// (Re)start the enumeration from the first candidate.
    pub fn init_solution_iterator(&mut self) {
        match &self.instance {
            Some(instance) => self.enumerator.initialize(&instance.problem, &instance.table),
            None => self.enumerator.exhaust(),
        }
    }

    /// Next solution as ascending indices into the original numbers.
    ///
    /// Returns `None` when no solutions remain, and keeps returning `None`
    /// until the enumeration is restarted.
    pub fn next_solution(&mut self) -> Option<Vec<usize>> {
        let instance = self.instance.as_ref()?;
        self.enumerator.next_solution(&instance.problem, &instance.table)
    }

    /// Restart the enumeration and iterate over every solution.
    pub fn solutions(&mut self) -> Solutions<'_> {
        self.init_solution_iterator();
        Solutions { solver: self }
    }

    /// GCD of the target and every number, or 1 when they are all zero.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Bytes held by the reachability table.
    pub fn memory_size(&self) -> usize {
        self.instance
            .as_ref()
            .map_or(0, |instance| instance.table.memory_bytes())
    }

    /// Counters for the enumeration in progress.
    pub fn statistics(&self) -> &Statistics {
        self.enumerator.statistics()
    }
}

/// Iterator over the solutions of a [`Solver`].
#[derive(Debug)]
pub struct Solutions<'a> {
    solver: &'a mut Solver,
}

impl Iterator for Solutions<'_> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.solver.next_solution()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableStorage;
    use crate::statistics::Counters;

    #[test]
    fn test_empty_input() {
        let mut solver = Solver::new(&[], 0);
        assert!(!solver.has_solution());
        assert_eq!(solver.infeasibility(), Some(&Infeasible::EmptyInput));
        solver.init_solution_iterator();
        assert_eq!(solver.next_solution(), None);
        assert_eq!(solver.memory_size(), 0);
    }

    #[test]
    fn test_unreachable_reason() {
        let solver = Solver::new(&[4, 6], 5);
        assert!(!solver.has_solution());
        assert_eq!(solver.infeasibility(), Some(&Infeasible::Unreachable));
    }

    #[test]
    fn test_scale_is_reported() {
        assert_eq!(Solver::new(&[4, 8, 12], 16).scale(), 4);
        assert_eq!(Solver::new(&[0, 0], 0).scale(), 1);
        assert_eq!(Solver::new(&[], 10).scale(), 10);
        assert_eq!(Solver::new(&[6, 9], 4).scale(), 1);
        assert_eq!(Solver::new(&[6, 9], 30).scale(), 3);
    }

    #[test]
    fn test_solutions_iterator_restarts() {
        let mut solver = Solver::new(&[1, 1, 1], 2);
        assert_eq!(solver.solutions().count(), 3);
        assert_eq!(solver.solutions().count(), 3);
        assert_eq!(solver.statistics().get(Counters::SolutionsEmitted), 3);
    }

    #[test]
    fn test_next_before_init_is_none() {
        let mut solver = Solver::new(&[1, 2, 3], 6);
        assert_eq!(solver.next_solution(), None);
        solver.init_solution_iterator();
        assert_eq!(solver.next_solution(), Some(vec![0, 1, 2]));
    }

    #[test]
    fn test_memory_size_depends_on_storage() {
        let numbers = [3, 34, 4, 12, 5, 2];
        let bits = Solver::with_options(
            &numbers,
            9,
            SolverOptions::builder().storage(TableStorage::Bits).build(),
        );
        let bytes = Solver::with_options(
            &numbers,
            9,
            SolverOptions::builder().storage(TableStorage::Bytes).build(),
        );
        // 4 active rows, 10 columns.
        assert_eq!(bits.memory_size(), 4 * 8);
        assert_eq!(bytes.memory_size(), 4 * 10);
    }
}
