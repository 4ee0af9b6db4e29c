// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reasons a problem has no solution.

use thiserror::Error;

/// Why a problem has no subset summing to its target.
///
/// These are ordinary outcomes, not failures of the solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Infeasible {
    /// No numbers were given. The empty subset is never a solution.
    #[error("no numbers to choose from")]
    EmptyInput,

    /// The reduced target lies outside the range of achievable sums.
    #[error("target {target} is outside the achievable range [{min}, {max}]")]
    OutOfRange { target: i64, min: i64, max: i64 },

    /// Every value is larger than any sum that could reach the target.
    #[error("every value exceeds the target")]
    NothingActive,

    /// The column count does not fit in memory indexing.
    #[error("table width {width} cannot be addressed")]
    TableTooWide { width: i64 },

    /// The table was built but the target cell is not reachable.
    #[error("no subset reaches the target")]
    Unreachable,
}
