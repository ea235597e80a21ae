//! NEON prefix-sum kernel for ARM64
//!
//! `vextq_f32(zero, v, 4 - k)` shifts `v` up by `k` lanes with zero fill.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::cumsum_tail_f32;

const F32_LANES: usize = 4;

/// NEON inclusive cumulative sum for f32
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `len >= 1`; `a` and `out` must be valid for `len` elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn cumsum_f32(a: *const f32, out: *mut f32, len: usize) {
    *out = *a;

    let zero = vdupq_n_f32(0.0);
    let groups = (len - 1) / F32_LANES;

    for g in 0..groups {
        let i = 1 + g * F32_LANES;

        let mut scan = vld1q_f32(a.add(i));
        scan = vaddq_f32(scan, vextq_f32::<3>(zero, scan));
        scan = vaddq_f32(scan, vextq_f32::<2>(zero, scan));

        let carry = vdupq_n_f32(*out.add(i - 1));
        vst1q_f32(out.add(i), vaddq_f32(scan, carry));
    }

    cumsum_tail_f32(a, out, 1 + groups * F32_LANES, len);
}
