//! SSE speed kernel

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::speed_scaled_scalar_f32;

const F32_LANES: usize = 4;

/// SSE speed for f32, given the precomputed `1 / dt`
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - All pointers must be valid for `len` elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn speed_f32(prev: *const f32, curr: *const f32, out: *mut f32, len: usize, inv_dt: f32) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;
    let v_inv = _mm_set1_ps(inv_dt);

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let diff = _mm_sub_ps(_mm_loadu_ps(curr.add(offset)), _mm_loadu_ps(prev.add(offset)));
        _mm_storeu_ps(out.add(offset), _mm_mul_ps(diff, v_inv));
    }

    if remainder > 0 {
        let offset = chunks * F32_LANES;
        speed_scaled_scalar_f32(
            prev.add(offset),
            curr.add(offset),
            out.add(offset),
            remainder,
            inv_dt,
        );
    }
}
