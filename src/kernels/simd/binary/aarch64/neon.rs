//! NEON speed kernel for ARM64

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::speed_scaled_scalar_f32;

const F32_LANES: usize = 4;

/// NEON speed for f32, given the precomputed `1 / dt`
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - All pointers must be valid for `len` elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn speed_f32(prev: *const f32, curr: *const f32, out: *mut f32, len: usize, inv_dt: f32) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;
    let v_inv = vdupq_n_f32(inv_dt);

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let diff = vsubq_f32(vld1q_f32(curr.add(offset)), vld1q_f32(prev.add(offset)));
        vst1q_f32(out.add(offset), vmulq_f32(diff, v_inv));
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
