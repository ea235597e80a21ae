//! NEON causal moving-average kernel for ARM64
//!
//! Each output re-sums its window: whole lanes with `vaddq_f32`, then the
//! `actual % 4` leftovers one at a time.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::super::math::aarch64::neon::hsum_f32;
use super::super::window_start;

const F32_LANES: usize = 4;

/// NEON causal moving average for f32
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `window >= 1`; `a` and `out` must be valid for `len` elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn moving_average_f32(a: *const f32, out: *mut f32, len: usize, window: usize) {
    for i in 0..len {
        let start = window_start(i, window);
        let end = i + 1;
        let actual = end - start;
        let simd_end = start + (actual / F32_LANES) * F32_LANES;

        let mut acc = vdupq_n_f32(0.0);
        let mut j = start;
        while j < simd_end {
            acc = vaddq_f32(acc, vld1q_f32(a.add(j)));
            j += F32_LANES;
        }

        let mut total = hsum_f32(acc);
        for k in simd_end..end {
            total += *a.add(k);
        }

        *out.add(i) = total / actual as f32;
    }
}
