// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Known instances with hand-checked solution sets.

mod common;

use common::{brute_force, collect_checked};
use std::collections::BTreeSet;
use subset_sum::{Infeasible, Solver, SolverOptions, TableStorage};

fn set(solutions: &[&[usize]]) -> BTreeSet<Vec<usize>> {
    solutions.iter().map(|s| s.to_vec()).collect()
}

#[test]
fn test_empty_input_has_no_solution_even_for_zero() {
    let mut solver = Solver::new(&[], 0);
    assert!(!solver.has_solution());
    solver.init_solution_iterator();
    assert_eq!(solver.next_solution(), None);
}

#[test]
fn test_whole_set_is_the_only_solution() {
    let numbers = [1, 2, 3];
    let mut solver = Solver::new(&numbers, 6);
    assert!(solver.has_solution());
    assert_eq!(collect_checked(&mut solver, &numbers, 6), set(&[&[0, 1, 2]]));
}

#[test]
fn test_classic_instance() {
    let numbers = [3, 34, 4, 12, 5, 2];
    let mut solver = Solver::new(&numbers, 9);
    let solutions = collect_checked(&mut solver, &numbers, 9);
    assert!(solutions.contains(&vec![0, 2, 5]));
    assert!(solutions.contains(&vec![2, 4]));
    assert_eq!(solutions, brute_force(&numbers, 9));
}

#[test]
fn test_negative_target() {
    let numbers = [-5];
    let mut solver = Solver::new(&numbers, -5);
    assert_eq!(collect_checked(&mut solver, &numbers, -5), set(&[&[0]]));
}

#[test]
fn test_positive_value_cannot_reach_negative_target() {
    let solver = Solver::new(&[5], -5);
    assert!(!solver.has_solution());
    assert!(matches!(
        solver.infeasibility(),
        Some(Infeasible::OutOfRange { .. })
    ));
}

#[test]
fn test_equal_values_are_distinct_by_position() {
    let numbers = [1, 1, 1];
    let mut solver = Solver::new(&numbers, 2);
    assert_eq!(
        collect_checked(&mut solver, &numbers, 2),
        set(&[&[0, 1], &[0, 2], &[1, 2]])
    );
}

#[test]
fn test_exhaustion_is_sticky() {
    let mut solver = Solver::new(&[2, 2], 2);
    solver.init_solution_iterator();
    assert!(solver.next_solution().is_some());
    assert!(solver.next_solution().is_some());
    for _ in 0..5 {
        assert_eq!(solver.next_solution(), None);
    }
}

#[test]
fn test_restart_reproduces_the_same_order() {
    let numbers = [3, 34, 4, 12, 5, 2, 7, 1];
    let mut solver = Solver::new(&numbers, 12);
    let first: Vec<_> = solver.solutions().collect();
    let second: Vec<_> = solver.solutions().collect();
    assert_eq!(first, second);
    assert!(!first.is_empty());
}

#[test]
fn test_mixed_signs_and_zero_target() {
    let numbers = [-7, 3, 4, -2, 2, 0];
    let mut solver = Solver::new(&numbers, 0);
    assert_eq!(
        collect_checked(&mut solver, &numbers, 0),
        brute_force(&numbers, 0)
    );
}

#[test]
fn test_all_zero_input() {
    let numbers = [0, 0, 0];
    let mut solver = Solver::new(&numbers, 0);
    assert_eq!(collect_checked(&mut solver, &numbers, 0).len(), 7);
}

#[test]
fn test_common_divisor_is_factored_out() {
    let numbers = [10, 20, 30, 40];
    let mut solver = Solver::new(&numbers, 50);
    assert_eq!(solver.scale(), 10);
    assert_eq!(
        collect_checked(&mut solver, &numbers, 50),
        set(&[&[0, 3], &[1, 2]])
    );
}

#[test]
fn test_every_configuration_agrees() {
    let numbers = [9, -4, 10, 3, 3, -1, 6];
    for target in -5..=30 {
        let expected = brute_force(&numbers, target);
        for storage in [TableStorage::Bits, TableStorage::Bytes] {
            for trim_rows in [true, false] {
                let options = SolverOptions::builder()
                    .storage(storage)
                    .trim_rows(trim_rows)
                    .build();
                let mut solver = Solver::with_options(&numbers, target, options);
                assert_eq!(solver.has_solution(), !expected.is_empty());
                assert_eq!(
                    collect_checked(&mut solver, &numbers, target),
                    expected,
                    "target {} {:?}",
                    target,
                    options
                );
            }
        }
    }
}
