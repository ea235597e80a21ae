//! SSE causal moving-average kernel

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::super::math::sse::hsum_f32;
use super::window_start;

const F32_LANES: usize = 4;

/// SSE causal moving average for f32
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - `window >= 1`; `a` and `out` must be valid for `len` elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn moving_average_f32(a: *const f32, out: *mut f32, len: usize, window: usize) {
    for i in 0..len {
        let start = window_start(i, window);
        let end = i + 1;
        let actual = end - start;
        let simd_end = start + (actual / F32_LANES) * F32_LANES;

        let mut acc = _mm_setzero_ps();
        let mut j = start;
        while j < simd_end {
            acc = _mm_add_ps(acc, _mm_loadu_ps(a.add(j)));
            j += F32_LANES;
        }

        let mut total = hsum_f32(acc);
        for k in simd_end..end {
            total += *a.add(k);
        }

        *out.add(i) = total / actual as f32;
    }
}
