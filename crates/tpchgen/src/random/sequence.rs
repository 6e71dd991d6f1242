use crate::error::GenerationError;

/// Produces the dense sequence `start, start+1, …, start+length-1`.
///
/// Uniqueness and contiguity hold by construction; a range whose end would
/// overflow `i64` fails instead of silently wrapping.
pub fn primary_key(start: i64, length: usize) -> Result<Vec<i64>, GenerationError> {
    if length == 0 {
        return Ok(Vec::new());
    }
    let span = i64::try_from(length - 1)
        .map_err(|_| GenerationError::KeyRangeOverflow { start, length })?;
    let end = start
        .checked_add(span)
        .ok_or(GenerationError::KeyRangeOverflow { start, length })?;
    Ok((start..=end).collect())
}

/// Produces `length` identical copies of one value.
pub fn repeat_value<T: Clone>(value: T, length: usize) -> Vec<T> {
    vec![value; length]
}

/// Produces the pattern `0,1,…,modulus-1,0,1,…` (or `1,…,modulus` when
/// one-indexed) repeated to fill `length` rows; used for round-robin
/// assignment.
pub fn repeat_sequence(
    modulus: i64,
    zero_indexed: bool,
    length: usize,
) -> Result<Vec<i64>, GenerationError> {
    if modulus <= 0 {
        return Err(GenerationError::ZeroModulus);
    }
    let offset = i64::from(!zero_indexed);
    Ok((0..length)
        .map(|row| (row as i64 % modulus) + offset)
        .collect())
}
