use rand::RngExt;

use crate::context::GenContext;
use crate::error::GenerationError;

/// Produces `length` values, each independently and uniformly selected with
/// replacement from a fixed finite candidate set.
pub fn random_choice<T: Clone>(
    ctx: &mut GenContext,
    candidates: &[T],
    length: usize,
) -> Result<Vec<T>, GenerationError> {
    if candidates.is_empty() {
        return Err(GenerationError::EmptyCandidates);
    }
    Ok((0..length)
        .map(|_| {
            let index = ctx.rng().random_range(0..candidates.len());
            candidates[index].clone()
        })
        .collect())
}
