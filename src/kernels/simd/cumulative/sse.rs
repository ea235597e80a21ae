//! SSE prefix-sum kernel
//!
//! Lane shifts are byte shifts on the integer view of the register.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::cumsum_tail_f32;

const F32_LANES: usize = 4;

/// Shift lanes toward higher indices by `BYTES / 4`, filling with zero
#[target_feature(enable = "sse4.1")]
#[inline]
unsafe fn shift_lanes<const BYTES: i32>(v: __m128) -> __m128 {
    _mm_castsi128_ps(_mm_slli_si128::<BYTES>(_mm_castps_si128(v)))
}

/// SSE inclusive cumulative sum for f32
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - `len >= 1`; `a` and `out` must be valid for `len` elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn cumsum_f32(a: *const f32, out: *mut f32, len: usize) {
    *out = *a;

    let groups = (len - 1) / F32_LANES;

    for g in 0..groups {
        let i = 1 + g * F32_LANES;

        // [x0, x0+x1, x1+x2, x2+x3] -> [x0, x0+x1, x0+x1+x2, x0+..+x3]
        let mut scan = _mm_loadu_ps(a.add(i));
        scan = _mm_add_ps(scan, shift_lanes::<4>(scan));
        scan = _mm_add_ps(scan, shift_lanes::<8>(scan));

        let carry = _mm_set1_ps(*out.add(i - 1));
        _mm_storeu_ps(out.add(i), _mm_add_ps(scan, carry));
    }

    cumsum_tail_f32(a, out, 1 + groups * F32_LANES, len);
}
