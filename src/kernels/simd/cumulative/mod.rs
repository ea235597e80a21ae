//! SIMD-optimized inclusive prefix sum
//!
//! `out[0]` is seeded from `a[0]`; the rest of the stream is processed in
//! groups of 4 starting at index 1. Each group runs a Hillis–Steele scan
//! inside the register (shift-and-add by 1 lane, then by 2 lanes) and then
//! adds the carry `out[group_start - 1]` broadcast across all lanes. Fewer
//! than 4 remaining elements fall back to the sequential recurrence
//! `out[j] = out[j - 1] + a[j]`.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// SIMD-optimized inclusive cumulative sum for f32.
///
/// # Safety
/// - `a` must point to `len` valid f32 elements
/// - `out` must point to `len` writable f32 elements
pub unsafe fn cumsum_f32(a: *const f32, out: *mut f32, len: usize) {
    let level = detect_simd();

    // Need at least one full group after the seed element
    if len <= LANES || level == SimdLevel::Scalar {
        cumsum_scalar_f32(a, out, len);
        return;
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => sse::cumsum_f32(a, out, len),
        _ => cumsum_scalar_f32(a, out, len),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => aarch64::neon::cumsum_f32(a, out, len),
        _ => cumsum_scalar_f32(a, out, len),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    cumsum_scalar_f32(a, out, len);
}

/// Scalar inclusive cumulative sum
///
/// # Safety
/// Same contract as [`cumsum_f32`].
#[inline]
pub unsafe fn cumsum_scalar_f32(a: *const f32, out: *mut f32, len: usize) {
    if len == 0 {
        return;
    }
    *out = *a;
    cumsum_tail_f32(a, out, 1, len);
}

/// Sequential recurrence for `start..len`; requires `start >= 1`.
#[inline]
pub(crate) unsafe fn cumsum_tail_f32(a: *const f32, out: *mut f32, start: usize, len: usize) {
    for j in start..len {
        *out.add(j) = *out.add(j - 1) + *a.add(j);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cumsum_ten_elements() {
        let input: Vec<f32> = (1..=10).map(|x| x as f32).collect();
        let mut output = vec![0.0f32; 10];

        unsafe { cumsum_f32(input.as_ptr(), output.as_mut_ptr(), 10) }

        assert_eq!(
            output,
            [1.0, 3.0, 6.0, 10.0, 15.0, 21.0, 28.0, 36.0, 45.0, 55.0]
        );
    }

    #[test]
    fn test_cumsum_every_length_matches_scalar() {
        for len in 0..=21 {
            let input: Vec<f32> = (0..len).map(|x| (x % 7) as f32 - 3.0).collect();
            let mut simd = vec![0.0f32; len];
            let mut scalar = vec![0.0f32; len];

            unsafe {
                cumsum_f32(input.as_ptr(), simd.as_mut_ptr(), len);
                cumsum_scalar_f32(input.as_ptr(), scalar.as_mut_ptr(), len);
            }

            // Small integers: every partial sum is exact
            assert_eq!(simd, scalar, "len {len}");
        }
    }

    #[test]
    fn test_cumsum_empty_is_noop() {
        let mut out = [9.0f32];
        unsafe { cumsum_f32(std::ptr::null(), out.as_mut_ptr(), 0) }
        assert_eq!(out[0], 9.0);
    }

    #[test]
    fn test_cumsum_single_element() {
        let input = [4.5f32];
        let mut out = [0.0f32];
        unsafe { cumsum_f32(input.as_ptr(), out.as_mut_ptr(), 1) }
        assert_eq!(out[0], 4.5);
    }
}
