//! SSE threshold detection kernel

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::threshold_scalar_f32;

const F32_LANES: usize = 4;

/// SSE threshold detection for f32
///
/// # Safety
/// - CPU must support SSE4.1 and FMA
/// - `a` must be valid for `len` elements, `out` for `len` bytes
#[target_feature(enable = "sse4.1", enable = "fma")]
pub unsafe fn threshold_f32(a: *const f32, out: *mut u8, len: usize, threshold: f32) {
    let chunks = len / F32_LANES;
    let remainder = len % F32_LANES;

    let v_thresh = _mm_set1_ps(threshold);
    let zero = _mm_setzero_si128();
    let one = _mm_set1_epi8(1);

    for i in 0..chunks {
        let offset = i * F32_LANES;
        let mask = _mm_castps_si128(_mm_cmpgt_ps(_mm_loadu_ps(a.add(offset)), v_thresh));

        // i32 lanes of 0 / -1 -> i16 -> i8, then keep the low bit
        let mask16 = _mm_packs_epi32(mask, zero);
        let mask8 = _mm_and_si128(_mm_packs_epi16(mask16, zero), one);

        let bytes = (_mm_cvtsi128_si32(mask8) as u32).to_le_bytes();
        std::ptr::copy_nonoverlapping(bytes.as_ptr(), out.add(offset), F32_LANES);
    }

    if remainder > 0 {
        let offset = chunks * F32_LANES;
        threshold_scalar_f32(a.add(offset), out.add(offset), remainder, threshold);
    }
}
