//! Index-expansion of parent rows into child rows.
//!
//! The fan-out is modelled as an explicit mapping step: build a repeat count
//! per parent, derive the flat child-to-parent index mapping, then gather
//! parent columns through that mapping. No per-row imperative loops over
//! table state.

use crate::error::GenerationError;

/// Builds the flat child-to-parent index mapping for the given per-parent
/// child counts: parent `i` contributes `counts[i]` consecutive entries of
/// value `i`.
pub fn parent_indices(counts: &[i32]) -> Result<Vec<usize>, GenerationError> {
    let mut total = 0usize;
    for (parent, &count) in counts.iter().enumerate() {
        if count < 0 {
            return Err(GenerationError::NegativeChildCount { parent });
        }
        total += count as usize;
    }
    let mut indices = Vec::with_capacity(total);
    for (parent, &count) in counts.iter().enumerate() {
        indices.extend(std::iter::repeat_n(parent, count as usize));
    }
    Ok(indices)
}

/// Builds the per-child sequence numbers `1..=count` within each parent.
pub fn sequence_numbers(counts: &[i32]) -> Vec<i32> {
    let total: usize = counts.iter().map(|&c| c.max(0) as usize).sum();
    let mut numbers = Vec::with_capacity(total);
    for &count in counts {
        numbers.extend(1..=count);
    }
    numbers
}

/// Gathers a parent slice through a child-to-parent index mapping.
pub fn gather<T: Clone>(parents: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| parents[i].clone()).collect()
}
