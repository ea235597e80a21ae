//! Buffer-length validation shared by the safe operations

use crate::error::{Error, Result};

/// Validates that a paired input has the same length as the primary input.
///
/// # Errors
///
/// Returns `ShapeMismatch` when `got != expected`.
#[inline]
pub(crate) fn validate_same_len(arg: &'static str, expected: usize, got: usize) -> Result<()> {
    if got != expected {
        return Err(Error::shape_mismatch(arg, expected, got));
    }
    Ok(())
}

/// Validates that an output buffer can hold `needed` results.
///
/// Longer buffers are accepted; only the first `needed` slots are written.
///
/// # Errors
///
/// Returns `InvalidArgument` when the buffer is too short.
#[inline]
pub(crate) fn validate_output_len(
    arg: &'static str,
    needed: usize,
    got: usize,
    op: &'static str,
) -> Result<()> {
    if got < needed {
        return Err(Error::invalid_argument(
            arg,
            format!("{} needs room for {} results, buffer holds {}", op, needed, got),
        ));
    }
    Ok(())
}
