// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Greatest common divisor over a whole problem.

/// Euclid's algorithm on two non-negative values.
fn euclid(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a
}

/// GCD of `|target|` and every `|numbers[i]|`.
///
/// Returns 0 only when the target and every number are zero.
pub fn gcd(numbers: &[i64], target: i64) -> i64 {
    numbers
        .iter()
        .fold(target.abs(), |acc, &n| euclid(acc, n.abs()))
}
