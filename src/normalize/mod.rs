// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reduction of a raw problem to the canonical form the table is built on.
//!
//! Normalization applies, in order:
//!
//! 1. Reject empty input.
//! 2. Divide everything by the GCD of the target and all numbers.
//! 3. Negate everything when the target is negative, so the reduced
//!    target is never negative. A subset sums to `-T` under the original
//!    numbers exactly when it sums to `T` under the negated ones.
//! 4. Stable-sort the values ascending, remembering original positions.
//! 5. Check the target against the achievable range `[offset, positive_sum]`.
//! 6. Optionally trim the largest values that can never take part.
//!
//! # Example
//!
//! ```
//! use subset_sum::config::SolverOptions;
//! use subset_sum::normalize::normalize;
//!
//! let problem = normalize(&[6, -3, -9], -6, &SolverOptions::default()).unwrap();
//! assert_eq!(problem.scale, 3);
//! assert!(problem.sign_flipped);
//! assert_eq!(problem.values, vec![-2, 1, 3]);
//! assert_eq!(problem.target, 2);
//! assert_eq!(problem.offset, -2);
//! assert_eq!(problem.width, 5);
//! ```

pub mod argsort;
pub mod errors;
pub mod gcd;

pub use argsort::stable_argsort;
pub use errors::Infeasible;
pub use gcd::gcd;

use crate::config::SolverOptions;
use crate::remap::Permutation;
use tracing::debug;

/// A problem in canonical form.
///
/// Column `j` of the reachability table stands for the sum `offset + j`;
/// the last column, `width - 1`, stands for `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedProblem {
    /// Positive divisor applied to every number and the target.
    pub scale: i64,

    /// Whether every value was negated because the target was negative.
    pub sign_flipped: bool,

    /// Reduced values, ascending.
    pub values: Vec<i64>,

    /// Original index of each sorted value.
    pub permutation: Permutation,

    /// Reduced target, never negative.
    pub target: i64,

    /// Sum of the negative values: the smallest reachable sum.
    pub offset: i64,

    /// Sum of the non-negative values: the largest reachable sum.
    pub positive_sum: i64,

    /// Number of table columns, `target - offset + 1`.
    pub width: usize,

    /// Number of leading sorted values that take part in the table.
    pub active: usize,
}

impl NormalizedProblem {
    /// Value represented by column `col`.
    pub fn column_sum(&self, col: usize) -> i64 {
        self.offset + col as i64
    }

    /// Column representing `sum`, if it lies inside the table.
    pub fn column_of(&self, sum: i64) -> Option<usize> {
        let col = sum - self.offset;
        if col >= 0 && col < self.width as i64 {
            Some(col as usize)
        } else {
            None
        }
    }

    /// Values that take part in the table.
    pub fn active_values(&self) -> &[i64] {
        &self.values[..self.active]
    }
}

/// Common divisor of the target and every number, never zero.
///
/// All-zero input has GCD 0 and is treated as already reduced.
pub fn scale_of(numbers: &[i64], target: i64) -> i64 {
    match gcd(numbers, target) {
        0 => 1,
        g => g,
    }
}

/// Normalize `(numbers, target)`, or report why no subset can reach the target.
///
/// Sums over all of `numbers` must fit in an `i64`.
pub fn normalize(
    numbers: &[i64],
    target: i64,
    options: &SolverOptions,
) -> Result<NormalizedProblem, Infeasible> {
    if numbers.is_empty() {
        return Err(Infeasible::EmptyInput);
    }

    let scale = scale_of(numbers, target);
    let sign_flipped = target < 0;
    let sign = if sign_flipped { -1 } else { 1 };

    let reduced: Vec<i64> = numbers.iter().map(|&n| sign * n / scale).collect();
    let target = sign * target / scale;

    let (values, permutation) = stable_argsort(&reduced);

    let offset: i64 = values.iter().filter(|&&v| v < 0).sum();
    let positive_sum: i64 = values.iter().filter(|&&v| v >= 0).sum();
    if target < offset || target > positive_sum {
        return Err(Infeasible::OutOfRange {
            target,
            min: offset,
            max: positive_sum,
        });
    }

    let width_sum = target - offset + 1;
    let width =
        usize::try_from(width_sum).map_err(|_| Infeasible::TableTooWide { width: width_sum })?;

    // A value v >= width forces any subset containing it to sum to at
    // least v + offset > target.
    let active = if options.trim_rows {
        values.partition_point(|&v| v < width_sum)
    } else {
        values.len()
    };
    if active == 0 {
        return Err(Infeasible::NothingActive);
    }

    debug!(
        scale,
        sign_flipped,
        target,
        offset,
        width,
        active,
        total = values.len(),
        "normalized problem"
    );

    Ok(NormalizedProblem {
        scale,
        sign_flipped,
        values,
        permutation,
        target,
        offset,
        positive_sum,
        width,
        active,
    })
}
