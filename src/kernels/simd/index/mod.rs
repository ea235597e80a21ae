//! SIMD-optimized arg-min
//!
//! Each of the 4 lanes tracks its own `(min, index)` pair, seeded from
//! elements `0..4` with indices `{0, 1, 2, 3}` and updated with a strict `<`
//! mask, so a lane never replaces an equal value it saw earlier. The lanes
//! are then collapsed into one candidate (equal values resolve to the lower
//! index) and the scalar tail is scanned with strict `<`.
//!
//! The result is always the smallest index holding the minimum. An empty
//! input returns the sentinel `0`, which says nothing about element 0.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// SIMD-optimized index of the minimum element.
///
/// # Safety
/// - `a` must point to `len` valid f32 elements
pub unsafe fn argmin_f32(a: *const f32, len: usize) -> usize {
    let level = detect_simd();

    // Lane indices are u32
    if len < LANES || len > u32::MAX as usize || level == SimdLevel::Scalar {
        return argmin_scalar_f32(a, len);
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => return sse::argmin_f32(a, len),
        _ => return argmin_scalar_f32(a, len),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => return aarch64::neon::argmin_f32(a, len),
        _ => return argmin_scalar_f32(a, len),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    argmin_scalar_f32(a, len)
}

/// Scalar arg-min
///
/// # Safety
/// Same contract as [`argmin_f32`].
#[inline]
pub unsafe fn argmin_scalar_f32(a: *const f32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    argmin_tail_f32(a, 1, len, *a, 0)
}

/// Collapse per-lane candidates into one `(min, index)` pair.
///
/// Seeds from element 0; a lane replaces the running best when its value is
/// strictly smaller, or equal with a lower index.
#[inline]
pub(crate) unsafe fn collapse_lanes(a: *const f32, values: [f32; 4], indices: [u32; 4]) -> (f32, usize) {
    let mut min_val = *a;
    let mut min_idx = 0usize;
    for (&v, &idx) in values.iter().zip(indices.iter()) {
        let idx = idx as usize;
        if v < min_val || (v == min_val && idx < min_idx) {
            min_val = v;
            min_idx = idx;
        }
    }
    (min_val, min_idx)
}

/// Strict `<` scan over `start..len` continuing from `(min_val, min_idx)`
#[inline]
pub(crate) unsafe fn argmin_tail_f32(
    a: *const f32,
    start: usize,
    len: usize,
    mut min_val: f32,
    mut min_idx: usize,
) -> usize {
    for i in start..len {
        let v = *a.add(i);
        if v < min_val {
            min_val = v;
            min_idx = i;
        }
    }
    min_idx
}
