//! SSE reduction kernels
//!
//! 128-bit FMA accumulation with a pairwise horizontal sum at the end.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::super::math::sse::hsum_f32;
use super::{dot_tail_f32, weighted_sums_tail_f32};

const F32_LANES: usize = 4;

/// SSE weighted sums `(Σ v·w, Σ w)`
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - `values` and `weights` must point to `len` valid f32 elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn weighted_sums_f32(values: *const f32, weights: *const f32, len: usize) -> (f32, f32) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    let mut acc_weighted = _mm_setzero_ps();
    let mut acc_weights = _mm_setzero_ps();

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let v = _mm_loadu_ps(values.add(offset));
        let w = _mm_loadu_ps(weights.add(offset));
        acc_weighted = _mm_fmadd_ps(v, w, acc_weighted);
        acc_weights = _mm_add_ps(acc_weights, w);
    }

    let offset = chunks * F32_LANES;
    weighted_sums_tail_f32(
        values.add(offset),
        weights.add(offset),
        remainder,
        hsum_f32(acc_weighted),
        hsum_f32(acc_weights),
    )
}

/// SSE dot product
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - `a` and `b` must point to `len` valid f32 elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn dot_f32(a: *const f32, b: *const f32, len: usize) -> f32 {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    let mut acc = _mm_setzero_ps();
    for i in 0..chunks {
        let offset = i * F32_LANES;
        acc = _mm_fmadd_ps(_mm_loadu_ps(a.add(offset)), _mm_loadu_ps(b.add(offset)), acc);
    }

    let offset = chunks * F32_LANES;
    dot_tail_f32(a.add(offset), b.add(offset), remainder, hsum_f32(acc))
}
