//! SSE arg-min kernel
//!
//! Values and indices are blended with the same `_mm_cmplt_ps` mask; the
//! index register is reinterpreted as floats for `_mm_blendv_ps`.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{argmin_tail_f32, collapse_lanes};

const F32_LANES: usize = 4;

/// SSE arg-min for f32
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - `4 <= len <= u32::MAX`; `a` must be valid for `len` elements
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn argmin_f32(a: *const f32, len: usize) -> usize {
    let simd_len = len - len % F32_LANES;

    let mut min_vec = _mm_loadu_ps(a);
    let mut min_idx = _mm_setr_epi32(0, 1, 2, 3);
    let mut cur_idx = min_idx;
    let step = _mm_set1_epi32(F32_LANES as i32);

    let mut i = F32_LANES;
    while i < simd_len {
        let data = _mm_loadu_ps(a.add(i));
        cur_idx = _mm_add_epi32(cur_idx, step);

        let mask = _mm_cmplt_ps(data, min_vec);
        min_vec = _mm_blendv_ps(min_vec, data, mask);
        min_idx = _mm_castps_si128(_mm_blendv_ps(
            _mm_castsi128_ps(min_idx),
            _mm_castsi128_ps(cur_idx),
            mask,
        ));
        i += F32_LANES;
    }

    let mut values = [0.0f32; 4];
    let mut indices = [0u32; 4];
    _mm_storeu_ps(values.as_mut_ptr(), min_vec);
    _mm_storeu_si128(indices.as_mut_ptr() as *mut __m128i, min_idx);

    let (min_val, best) = collapse_lanes(a, values, indices);
    argmin_tail_f32(a, simd_len, len, min_val, best)
}
