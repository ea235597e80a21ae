//! SSE squared distance kernel

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::distance_squared_scalar_f32;

const F32_LANES: usize = 4;

/// SSE squared distance for f32
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - All pointers must be valid for `len` elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn distance_squared_f32(
    x1: *const f32,
    y1: *const f32,
    x2: *const f32,
    y2: *const f32,
    out: *mut f32,
    len: usize,
) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let dx = _mm_sub_ps(_mm_loadu_ps(x2.add(offset)), _mm_loadu_ps(x1.add(offset)));
        let dy = _mm_sub_ps(_mm_loadu_ps(y2.add(offset)), _mm_loadu_ps(y1.add(offset)));
        // No FMA here: lane results equal the scalar tail exactly
        let d2 = _mm_add_ps(_mm_mul_ps(dx, dx), _mm_mul_ps(dy, dy));
        _mm_storeu_ps(out.add(offset), d2);
    }

    if remainder > 0 {
        let offset = chunks * F32_LANES;
        distance_squared_scalar_f32(
            x1.add(offset),
            y1.add(offset),
            x2.add(offset),
            y2.add(offset),
            out.add(offset),
            remainder,
        );
    }
}
