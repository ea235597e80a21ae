//! NEON horizontal reductions

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

/// Horizontal sum of 4 f32 values in a NEON register
///
/// # Safety
/// Requires NEON (always available on AArch64)
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
#[inline]
pub(crate) unsafe fn hsum_f32(v: float32x4_t) -> f32 {
    // [l0+l1, l2+l3], then fold the pair
    let sum = vpadd_f32(vget_low_f32(v), vget_high_f32(v));
    vget_lane_f32::<0>(vpadd_f32(sum, sum))
}
