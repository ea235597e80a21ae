//! SIMD-optimized squared point distance
//!
//! Point sets arrive as parallel coordinate streams (`x1, y1` and `x2, y2`).
//! Each output is `dx² + dy²` with `dx = x2 - x1` and `dy = y2 - y1`; there is
//! no reduction, so lane and tail results are bit-identical.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// One coordinate axis of four points, one point per lane
pub type Point4 = [f32; LANES];

/// Squared distances between four point pairs.
///
/// This is the single call unit of the kernel: one lane of x/y coordinates
/// for each point set.
#[inline]
pub fn distance_squared_x4(x1: Point4, y1: Point4, x2: Point4, y2: Point4) -> Point4 {
    let mut out = [0.0f32; LANES];
    // SAFETY: every array holds exactly LANES elements
    unsafe {
        distance_squared_f32(
            x1.as_ptr(),
            y1.as_ptr(),
            x2.as_ptr(),
            y2.as_ptr(),
            out.as_mut_ptr(),
            LANES,
        );
    }
    out
}

/// SIMD-optimized squared distance over `len` point pairs.
///
/// # Safety
/// - `x1`, `y1`, `x2`, `y2` must point to `len` valid f32 elements
/// - `out` must point to `len` writable f32 elements
pub unsafe fn distance_squared_f32(
    x1: *const f32,
    y1: *const f32,
    x2: *const f32,
    y2: *const f32,
    out: *mut f32,
    len: usize,
) {
    let level = detect_simd();

    if len < LANES || level == SimdLevel::Scalar {
        distance_squared_scalar_f32(x1, y1, x2, y2, out, len);
        return;
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => sse::distance_squared_f32(x1, y1, x2, y2, out, len),
        _ => distance_squared_scalar_f32(x1, y1, x2, y2, out, len),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => aarch64::neon::distance_squared_f32(x1, y1, x2, y2, out, len),
        _ => distance_squared_scalar_f32(x1, y1, x2, y2, out, len),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    distance_squared_scalar_f32(x1, y1, x2, y2, out, len);
}

/// Scalar squared distance
///
/// # Safety
/// Same pointer contract as [`distance_squared_f32`].
#[inline]
pub unsafe fn distance_squared_scalar_f32(
    x1: *const f32,
    y1: *const f32,
    x2: *const f32,
    y2: *const f32,
    out: *mut f32,
    len: usize,
) {
    for i in 0..len {
        let dx = *x2.add(i) - *x1.add(i);
        let dy = *y2.add(i) - *y1.add(i);
        *out.add(i) = dx * dx + dy * dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_squared_x4() {
        let x1 = [0.0, 1.0, 2.0, 3.0];
        let y1 = [0.0, 1.0, 2.0, 3.0];
        let x2 = [3.0, 4.0, 5.0, 6.0];
        let y2 = [4.0, 5.0, 6.0, 7.0];

        // (3,4) -> 25 for every pair
        assert_eq!(distance_squared_x4(x1, y1, x2, y2), [25.0; 4]);
    }

    #[test]
    fn test_distance_squared_with_tail() {
        let x1: Vec<f32> = (0..7).map(|i| i as f32).collect();
        let y1 = vec![0.0f32; 7];
        let x2 = vec![0.0f32; 7];
        let y2: Vec<f32> = (0..7).map(|i| -(i as f32)).collect();
        let mut out = vec![f32::NAN; 7];

        unsafe {
            distance_squared_f32(
                x1.as_ptr(),
                y1.as_ptr(),
                x2.as_ptr(),
                y2.as_ptr(),
                out.as_mut_ptr(),
                7,
            );
        }

        for (i, d) in out.iter().enumerate() {
            assert_eq!(*d, 2.0 * (i * i) as f32, "pair {i}");
        }
    }

    #[test]
    fn test_distance_squared_empty_writes_nothing() {
        let mut out = [7.0f32; 1];
        let p = [1.0f32];
        unsafe {
            distance_squared_f32(
                p.as_ptr(),
                p.as_ptr(),
                p.as_ptr(),
                p.as_ptr(),
                out.as_mut_ptr(),
                0,
            );
        }
        assert_eq!(out[0], 7.0);
    }
}
