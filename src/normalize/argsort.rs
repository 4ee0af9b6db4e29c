// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stable ascending sort that remembers where each value came from.

use crate::remap::Permutation;

/// Sort `values` ascending, keeping equal values in input order.
///
/// Returns the sorted values and, for each sorted slot, the index that
/// value occupied in `values`.
pub fn stable_argsort(values: &[i64]) -> (Vec<i64>, Permutation) {
    let mut indexed: Vec<(i64, usize)> = values.iter().copied().zip(0..).collect();
    // `sort_by_key` is stable.
    indexed.sort_by_key(|&(value, _)| value);

    let (sorted, indices): (Vec<i64>, Vec<usize>) = indexed.into_iter().unzip();
    (sorted, Permutation::new(indices))
}
