//! SIMD-optimized causal moving-average filter
//!
//! For each index `i` the window is `a[max(0, i + 1 - w) ..= i]`: it grows
//! from one sample at the start of the stream up to `w` samples and then
//! slides. Every window is summed from scratch (4-lane sum, horizontal
//! reduction, scalar tail) and divided by its actual length.
//!
//! Cost is `O(len · w)`.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// SIMD-optimized causal moving average for f32.
///
/// `window == 0` or `len == 0` is a no-op.
///
/// # Safety
/// - `a` must point to `len` valid f32 elements
/// - `out` must point to `len` writable f32 elements
pub unsafe fn moving_average_f32(a: *const f32, out: *mut f32, len: usize, window: usize) {
    if window == 0 || len == 0 {
        return;
    }

    let level = detect_simd();

    // Windows shorter than one lane never reach the vector path
    if window < LANES || level == SimdLevel::Scalar {
        moving_average_scalar_f32(a, out, len, window);
        return;
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => sse::moving_average_f32(a, out, len, window),
        _ => moving_average_scalar_f32(a, out, len, window),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => aarch64::neon::moving_average_f32(a, out, len, window),
        _ => moving_average_scalar_f32(a, out, len, window),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    moving_average_scalar_f32(a, out, len, window);
}

/// Start of the causal window ending at `i`
#[inline]
pub(crate) const fn window_start(i: usize, window: usize) -> usize {
    (i + 1).saturating_sub(window)
}

/// Scalar causal moving average
///
/// # Safety
/// Same contract as [`moving_average_f32`].
#[inline]
pub unsafe fn moving_average_scalar_f32(a: *const f32, out: *mut f32, len: usize, window: usize) {
    if window == 0 {
        return;
    }
    for i in 0..len {
        let start = window_start(i, window);
        let mut total = 0.0f32;
        for j in start..=i {
            total += *a.add(j);
        }
        *out.add(i) = total / (i + 1 - start) as f32;
    }
}
