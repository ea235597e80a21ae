//! SSE horizontal reductions for 128-bit registers

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Horizontal sum of 4 f32s in __m128
///
/// # Safety
/// CPU must support SSE3
#[target_feature(enable = "sse3")]
#[inline]
pub(crate) unsafe fn hsum_f32(v: __m128) -> f32 {
    // [l0+l1, l0+l1, l2+l3, l2+l3]
    let shuf = _mm_movehdup_ps(v);
    let pairs = _mm_add_ps(v, shuf);
    let high = _mm_movehl_ps(pairs, pairs);
    _mm_cvtss_f32(_mm_add_ss(pairs, high))
}
