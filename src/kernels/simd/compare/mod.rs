//! SIMD-optimized threshold detection
//!
//! Writes one byte per sample: `1` when `a[i] > threshold` (strict), else
//! `0`. Equality and NaN samples map to `0`. The lane path narrows the
//! 32-bit comparison mask down to byte lanes.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// SIMD-optimized threshold detection for f32.
///
/// # Safety
/// - `a` must point to `len` valid f32 elements
/// - `out` must point to `len` writable bytes
pub unsafe fn threshold_f32(a: *const f32, out: *mut u8, len: usize, threshold: f32) {
    let level = detect_simd();

    if len < LANES || level == SimdLevel::Scalar {
        threshold_scalar_f32(a, out, len, threshold);
        return;
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => sse::threshold_f32(a, out, len, threshold),
        _ => threshold_scalar_f32(a, out, len, threshold),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => aarch64::neon::threshold_f32(a, out, len, threshold),
        _ => threshold_scalar_f32(a, out, len, threshold),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    threshold_scalar_f32(a, out, len, threshold);
}

/// Scalar threshold detection
///
/// # Safety
/// Same contract as [`threshold_f32`].
#[inline]
pub unsafe fn threshold_scalar_f32(a: *const f32, out: *mut u8, len: usize, threshold: f32) {
    for i in 0..len {
        *out.add(i) = u8::from(*a.add(i) > threshold);
    }
}
