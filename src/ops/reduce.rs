//! Horizontal reductions: weighted average, dot product, arg-min

use super::validation::validate_same_len;
use crate::error::Result;
use crate::kernels::simd::{index, reduce};

/// Weighted average `Σ(values·weights) / Σ(weights)`.
///
/// Returns `0.0` for empty input or when the total weight is not strictly
/// positive.
///
/// # Errors
///
/// `ShapeMismatch` if `weights` differs in length from `values`.
pub fn weighted_average(values: &[f32], weights: &[f32]) -> Result<f32> {
    validate_same_len("weights", values.len(), weights.len())?;
    Ok(unsafe { reduce::weighted_average_f32(values.as_ptr(), weights.as_ptr(), values.len()) })
}

/// Dot product of two equal-length signals.
///
/// # Errors
///
/// `ShapeMismatch` if `b` differs in length from `a`.
pub fn dot(a: &[f32], b: &[f32]) -> Result<f32> {
    validate_same_len("b", a.len(), b.len())?;
    Ok(unsafe { reduce::dot_f32(a.as_ptr(), b.as_ptr(), a.len()) })
}

/// Single-lag cross-correlation, i.e. the dot product of the two signals.
///
/// No lag sweep is performed.
///
/// # Errors
///
/// `ShapeMismatch` if `signal2` differs in length from `signal1`.
pub fn cross_correlation(signal1: &[f32], signal2: &[f32]) -> Result<f32> {
    validate_same_len("signal2", signal1.len(), signal2.len())?;
    Ok(unsafe { reduce::cross_correlation_f32(signal1.as_ptr(), signal2.as_ptr(), signal1.len()) })
}

/// Index of the minimum sample; ties resolve to the smallest index.
///
/// An empty slice returns the sentinel `0`. Use [`argmin_checked`] to tell
/// the empty case apart.
pub fn argmin(data: &[f32]) -> usize {
    unsafe { index::argmin_f32(data.as_ptr(), data.len()) }
}

/// Like [`argmin`], but `None` for an empty slice.
pub fn argmin_checked(data: &[f32]) -> Option<usize> {
    if data.is_empty() {
        return None;
    }
    Some(argmin(data))
}
