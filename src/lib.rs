// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact subset-sum solver with full solution enumeration.
//!
//! Given signed integers and a target, the solver decides whether some
//! non-empty subset sums exactly to the target and then produces every
//! such subset, one per call, as ascending indices into the input.
//!
//! # Architecture
//!
//! The work happens in three stages, each owning its own data:
//!
//! 1. **Normalization** ([`normalize`]): divide by the common GCD, negate
//!    when the target is negative, sort ascending and record where each
//!    value came from.
//! 2. **Reachability table** ([`table`]): a row per sorted value and a
//!    column per sum between the most negative reachable sum and the
//!    target. Built once, read-only afterwards.
//! 3. **Enumeration** ([`enumerate`]): a depth-first walk backwards from
//!    the target cell on an explicit stack. The stack survives between
//!    calls, so the walk is resumable and never repeats a subset.
//!
//! Sorted positions are mapped back to input positions by [`remap`].
//!
//! # Example
//!
//! ```
//! use subset_sum::Solver;
//!
//! let mut solver = Solver::new(&[1, 1, 1], 2);
//! let mut solutions: Vec<Vec<usize>> = solver.solutions().collect();
//! solutions.sort();
//! assert_eq!(solutions, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
//! ```

pub mod config;
pub mod enumerate;
pub mod normalize;
pub mod remap;
pub mod solver;
pub mod statistics;
pub mod table;

// Re-export commonly used types
pub use config::{SolverOptions, TableStorage};
pub use normalize::Infeasible;
pub use solver::{Solutions, Solver};
