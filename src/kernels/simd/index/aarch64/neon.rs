//! NEON arg-min kernel for ARM64
//!
//! `vcltq_f32` produces the lane mask; `vbslq_f32` / `vbslq_u32` select the
//! new minima and their indices.

#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

use super::super::{argmin_tail_f32, collapse_lanes};

const F32_LANES: usize = 4;

/// NEON arg-min for f32
///
/// # Safety
/// - CPU must support NEON (always true on AArch64)
/// - `4 <= len <= u32::MAX`; `a` must be valid for `len` elements
#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
pub unsafe fn argmin_f32(a: *const f32, len: usize) -> usize {
    let simd_len = len - len % F32_LANES;

    let seed: [u32; 4] = [0, 1, 2, 3];
    let mut min_vec = vld1q_f32(a);
    let mut min_idx = vld1q_u32(seed.as_ptr());
    let mut cur_idx = min_idx;
    let step = vdupq_n_u32(F32_LANES as u32);

    let mut i = F32_LANES;
    while i < simd_len {
        let data = vld1q_f32(a.add(i));
        cur_idx = vaddq_u32(cur_idx, step);

        let mask = vcltq_f32(data, min_vec);
        min_vec = vbslq_f32(mask, data, min_vec);
        min_idx = vbslq_u32(mask, cur_idx, min_idx);
        i += F32_LANES;
    }

    let mut values = [0.0f32; 4];
    let mut indices = [0u32; 4];
    vst1q_f32(values.as_mut_ptr(), min_vec);
    vst1q_u32(indices.as_mut_ptr(), min_idx);

    let (min_val, best) = collapse_lanes(a, values, indices);
    argmin_tail_f32(a, simd_len, len, min_val, best)
}
