//! NEON squared distance kernel for ARM64
//!
//! Four point pairs per iteration: two `vsubq_f32`, two `vmulq_f32` and one
//! `vaddq_f32`.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::distance_squared_scalar_f32;

const F32_LANES: usize = 4;

/// NEON squared distance for f32
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - All pointers must be valid for `len` elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
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
        let dx = vsubq_f32(vld1q_f32(x2.add(offset)), vld1q_f32(x1.add(offset)));
        let dy = vsubq_f32(vld1q_f32(y2.add(offset)), vld1q_f32(y1.add(offset)));
        let d2 = vaddq_f32(vmulq_f32(dx, dx), vmulq_f32(dy, dy));
        vst1q_f32(out.add(offset), d2);
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
