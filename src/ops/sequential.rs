//! Prefix and recurrence operations: cumulative sum, exponential moving average

use super::validation::validate_output_len;
use crate::error::Result;
use crate::kernels::{recurrence, simd::cumulative};

/// Inclusive prefix sum of `input` into the first `input.len()` slots of
/// `output`.
///
/// # Errors
///
/// `InvalidArgument` if `output` is shorter than `input`.
pub fn cumulative_sum(input: &[f32], output: &mut [f32]) -> Result<()> {
    validate_output_len("output", input.len(), output.len(), "cumulative_sum")?;
    unsafe { cumulative::cumsum_f32(input.as_ptr(), output.as_mut_ptr(), input.len()) }
    Ok(())
}

/// Exponential moving average with smoothing factor `alpha`.
///
/// Each call starts fresh from `input[0]`. Callers that need continuity
/// across frames must carry the last output themselves.
///
/// # Errors
///
/// `InvalidArgument` if `output` is shorter than `input`.
pub fn exponential_moving_average(input: &[f32], output: &mut [f32], alpha: f32) -> Result<()> {
    validate_output_len("output", input.len(), output.len(), "exponential_moving_average")?;
    unsafe { recurrence::ema_f32(input.as_ptr(), output.as_mut_ptr(), input.len(), alpha) }
    Ok(())
}
