use rand::RngExt;
use rand::distr::Alphanumeric;

use crate::context::GenContext;
use crate::error::GenerationError;

/// Produces `length` alphanumeric strings, each with a length drawn
/// uniformly from `[min_len, max_len]`.
///
/// Every string is drawn independently with no sequential state, so the
/// batch is order-insensitive.
pub fn random_string(
    ctx: &mut GenContext,
    min_len: usize,
    max_len: usize,
    length: usize,
) -> Result<Vec<String>, GenerationError> {
    if min_len > max_len {
        return Err(GenerationError::InvalidRange {
            lower: min_len.to_string(),
            upper: max_len.to_string(),
        });
    }
    Ok((0..length)
        .map(|_| {
            let rng = ctx.rng();
            let chars = rng.random_range(min_len..=max_len);
            (&mut *rng)
                .sample_iter(Alphanumeric)
                .take(chars)
                .map(char::from)
                .collect()
        })
        .collect())
}
