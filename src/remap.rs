// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mapping from sorted positions back to caller positions.

/// For each sorted position, the index the value held in the caller's input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices)
    }

    /// Original index of the value now at sorted position `position`.
    pub fn original_index(&self, position: usize) -> usize {
        self.0[position]
    }

    /// Translate sorted positions into original indices, ascending.
    ///
    /// # Panics
    ///
    /// Panics if a position is outside the permutation. Positions produced
    /// by the enumerator are always below the number of active rows.
    pub fn remap(&self, positions: &[usize]) -> Vec<usize> {
        let mut indices: Vec<usize> = positions.iter().map(|&p| self.0[p]).collect();
        indices.sort_unstable();
        indices
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}
