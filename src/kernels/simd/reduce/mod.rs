//! SIMD-accelerated horizontal reductions
//!
//! # SIMD Support
//!
//! Operations with SIMD fast paths:
//! - Weighted average (`Σ v·w / Σ w`)
//! - Dot product, also exposed as single-lag "cross-correlation"
//!
//! # SIMD Strategy
//!
//! 1. Accumulate 4 lanes with fused multiply-add
//! 2. Horizontal reduction of the lane accumulators
//! 3. Scalar tail continues the same running sums
//!
//! Lane accumulation reassociates the sum, so SIMD and scalar results agree
//! only up to floating-point rounding.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// Weighted average `Σ(values·weights) / Σ(weights)`.
///
/// Returns `0.0` when `len == 0` or when the total weight is not strictly
/// positive.
///
/// # Safety
/// - `values` and `weights` must point to `len` valid f32 elements
#[inline]
pub unsafe fn weighted_average_f32(values: *const f32, weights: *const f32, len: usize) -> f32 {
    let (weighted_sum, weight_sum) = weighted_sums_f32(values, weights, len);
    finish_weighted_average(weighted_sum, weight_sum)
}

/// Dot product `Σ a[i]·b[i]`.
///
/// # Safety
/// - `a` and `b` must point to `len` valid f32 elements
#[inline]
pub unsafe fn dot_f32(a: *const f32, b: *const f32, len: usize) -> f32 {
    let level = detect_simd();

    if len < LANES || level == SimdLevel::Scalar {
        return dot_scalar_f32(a, b, len);
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => return sse::dot_f32(a, b, len),
        _ => return dot_scalar_f32(a, b, len),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => return aarch64::neon::dot_f32(a, b, len),
        _ => return dot_scalar_f32(a, b, len),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    dot_scalar_f32(a, b, len)
}

/// Single-lag cross-correlation, identical to [`dot_f32`].
///
/// # Safety
/// Same contract as [`dot_f32`].
#[inline]
pub unsafe fn cross_correlation_f32(signal1: *const f32, signal2: *const f32, len: usize) -> f32 {
    dot_f32(signal1, signal2, len)
}

/// Returns `(Σ v·w, Σ w)` using the best available backend
#[inline]
unsafe fn weighted_sums_f32(values: *const f32, weights: *const f32, len: usize) -> (f32, f32) {
    let level = detect_simd();

    if len < LANES || level == SimdLevel::Scalar {
        return weighted_sums_scalar_f32(values, weights, len);
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => return sse::weighted_sums_f32(values, weights, len),
        _ => return weighted_sums_scalar_f32(values, weights, len),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => return aarch64::neon::weighted_sums_f32(values, weights, len),
        _ => return weighted_sums_scalar_f32(values, weights, len),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    weighted_sums_scalar_f32(values, weights, len)
}

#[inline]
fn finish_weighted_average(weighted_sum: f32, weight_sum: f32) -> f32 {
    // NaN totals fail the comparison and fall back to zero as well
    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        0.0
    }
}

// ============================================================================
// Scalar Fallbacks
// ============================================================================

/// Scalar weighted average
///
/// # Safety
/// Same contract as [`weighted_average_f32`].
#[inline]
pub unsafe fn weighted_average_scalar_f32(
    values: *const f32,
    weights: *const f32,
    len: usize,
) -> f32 {
    let (weighted_sum, weight_sum) = weighted_sums_scalar_f32(values, weights, len);
    finish_weighted_average(weighted_sum, weight_sum)
}

/// Scalar running sums, continuing from the given accumulators.
#[inline]
pub(crate) unsafe fn weighted_sums_tail_f32(
    values: *const f32,
    weights: *const f32,
    len: usize,
    mut weighted_sum: f32,
    mut weight_sum: f32,
) -> (f32, f32) {
    for i in 0..len {
        let w = *weights.add(i);
        weighted_sum += *values.add(i) * w;
        weight_sum += w;
    }
    (weighted_sum, weight_sum)
}

#[inline]
unsafe fn weighted_sums_scalar_f32(values: *const f32, weights: *const f32, len: usize) -> (f32, f32) {
    weighted_sums_tail_f32(values, weights, len, 0.0, 0.0)
}

/// Scalar dot product
///
/// # Safety
/// Same contract as [`dot_f32`].
#[inline]
pub unsafe fn dot_scalar_f32(a: *const f32, b: *const f32, len: usize) -> f32 {
    dot_tail_f32(a, b, len, 0.0)
}

/// Scalar dot product continuing from `acc`
#[inline]
pub(crate) unsafe fn dot_tail_f32(a: *const f32, b: *const f32, len: usize, mut acc: f32) -> f32 {
    for i in 0..len {
        acc += *a.add(i) * *b.add(i);
    }
    acc
}

// ============================================================================
// Tests
// ============================================================================
