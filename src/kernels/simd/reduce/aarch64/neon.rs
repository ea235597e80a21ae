//! NEON reduction kernels for ARM64
//!
//! # SIMD Strategy
//!
//! 1. Process 4 f32 elements per iteration with `vfmaq_f32`
//! 2. Horizontal reduction with pairwise adds
//! 3. Scalar tail continues from the reduced sums

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::super::math::aarch64::neon::hsum_f32;
use super::super::{dot_tail_f32, weighted_sums_tail_f32};

const F32_LANES: usize = 4;

/// NEON weighted sums `(Σ v·w, Σ w)`
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `values` and `weights` must point to `len` valid f32 elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn weighted_sums_f32(values: *const f32, weights: *const f32, len: usize) -> (f32, f32) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    let mut acc_weighted = vdupq_n_f32(0.0);
    let mut acc_weights = vdupq_n_f32(0.0);

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let v = vld1q_f32(values.add(offset));
        let w = vld1q_f32(weights.add(offset));
        acc_weighted = vfmaq_f32(acc_weighted, v, w);
        acc_weights = vaddq_f32(acc_weights, w);
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

/// NEON dot product
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `a` and `b` must point to `len` valid f32 elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn dot_f32(a: *const f32, b: *const f32, len: usize) -> f32 {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    let mut acc = vdupq_n_f32(0.0);
    for i in 0..chunks {
        let offset = i * F32_LANES;
        acc = vfmaq_f32(acc, vld1q_f32(a.add(offset)), vld1q_f32(b.add(offset)));
    }

    let offset = chunks * F32_LANES;
    dot_tail_f32(a.add(offset), b.add(offset), remainder, hsum_f32(acc))
}
