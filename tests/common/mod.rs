// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::BTreeSet;
use subset_sum::Solver;

/// Every non-empty subset of `numbers` summing to `target`, by index.
///
/// Exponential; only for small inputs.
pub fn brute_force(numbers: &[i64], target: i64) -> BTreeSet<Vec<usize>> {
    assert!(numbers.len() <= 20, "brute force limited to 20 numbers");
    let mut solutions = BTreeSet::new();
    for mask in 1u32..(1 << numbers.len()) {
        let indices: Vec<usize> = (0..numbers.len()).filter(|&i| mask & (1 << i) != 0).collect();
        let sum: i64 = indices.iter().map(|&i| numbers[i]).sum();
        if sum == target {
            solutions.insert(indices);
        }
    }
    solutions
}

/// Drain a solver, checking each solution is well formed and new.
pub fn collect_checked(solver: &mut Solver, numbers: &[i64], target: i64) -> BTreeSet<Vec<usize>> {
    let mut seen = BTreeSet::new();
    solver.init_solution_iterator();
    while let Some(solution) = solver.next_solution() {
        assert!(!solution.is_empty(), "empty solution for {:?} = {}", numbers, target);
        assert!(
            solution.windows(2).all(|w| w[0] < w[1]),
            "solution {:?} not strictly ascending",
            solution
        );
        assert!(solution.iter().all(|&i| i < numbers.len()));
        let sum: i64 = solution.iter().map(|&i| numbers[i]).sum();
        assert_eq!(sum, target, "solution {:?} of {:?}", solution, numbers);
        assert!(seen.insert(solution.clone()), "duplicate solution {:?}", solution);
    }
    seen
}
