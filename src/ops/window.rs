//! Windowed operations

use super::validation::validate_output_len;
use crate::error::Result;
use crate::kernels::simd::window;

/// Causal moving average over a window of `window_size` samples.
///
/// The window grows from one sample at the start of the stream. A
/// `window_size` of zero leaves `output` untouched.
///
/// # Errors
///
/// `InvalidArgument` if `output` is shorter than `input`.
pub fn moving_average(input: &[f32], output: &mut [f32], window_size: usize) -> Result<()> {
    validate_output_len("output", input.len(), output.len(), "moving_average")?;
    unsafe {
        window::moving_average_f32(input.as_ptr(), output.as_mut_ptr(), input.len(), window_size)
    }
    Ok(())
}
