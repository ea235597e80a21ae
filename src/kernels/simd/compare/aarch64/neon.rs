//! NEON threshold detection kernel for ARM64
//!
//! The `vcgtq_f32` mask is narrowed 32 -> 16 -> 8 bits with `vmovn`.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::threshold_scalar_f32;

const F32_LANES: usize = 4;

/// NEON threshold detection for f32
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `a` must be valid for `len` elements, `out` for `len` bytes
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn threshold_f32(a: *const f32, out: *mut u8, len: usize, threshold: f32) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    let v_thresh = vdupq_n_f32(threshold);
    let one = vdup_n_u8(1);
    let mut bytes = [0u8; 8];

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let mask = vcgtq_f32(vld1q_f32(a.add(offset)), v_thresh);

        let mask16 = vmovn_u32(mask);
        let mask8 = vmovn_u16(vcombine_u16(mask16, vdup_n_u16(0)));
        vst1_u8(bytes.as_mut_ptr(), vand_u8(mask8, one));

        std::ptr::copy_nonoverlapping(bytes.as_ptr(), out.add(offset), F32_LANES);
    }

    if remainder > 0 {
        let offset = chunks * F32_LANES;
        threshold_scalar_f32(a.add(offset), out.add(offset), remainder, threshold);
    }
}
