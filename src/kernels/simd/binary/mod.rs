//! SIMD-optimized speed from position deltas
//!
//! `speed[i] = (curr[i] - prev[i]) * (1 / dt)`. The reciprocal is computed
//! once and broadcast, on the lane path and the tail alike, so results may
//! differ from a direct division in the last bit. `dt == 0` is not guarded
//! and produces ±inf or NaN.

#[cfg(target_arch = "x86_64")]
mod sse;

#[cfg(target_arch = "aarch64")]
mod aarch64;

use super::{detect_simd, SimdLevel, LANES};

/// SIMD-optimized speed kernel for f32.
///
/// # Safety
/// - `prev` and `curr` must point to `len` valid f32 elements
/// - `out` must point to `len` writable f32 elements
pub unsafe fn speed_f32(
    prev: *const f32,
    curr: *const f32,
    out: *mut f32,
    len: usize,
    time_delta: f32,
) {
    let level = detect_simd();
    let inv_dt = 1.0 / time_delta;

    if len < LANES || level == SimdLevel::Scalar {
        speed_scaled_scalar_f32(prev, curr, out, len, inv_dt);
        return;
    }

    #[cfg(target_arch = "x86_64")]
    match level {
        SimdLevel::SseFma => sse::speed_f32(prev, curr, out, len, inv_dt),
        _ => speed_scaled_scalar_f32(prev, curr, out, len, inv_dt),
    }

    #[cfg(target_arch = "aarch64")]
    match level {
        SimdLevel::Neon => aarch64::neon::speed_f32(prev, curr, out, len, inv_dt),
        _ => speed_scaled_scalar_f32(prev, curr, out, len, inv_dt),
    }

    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
    speed_scaled_scalar_f32(prev, curr, out, len, inv_dt);
}

/// Scalar speed kernel
///
/// # Safety
/// Same contract as [`speed_f32`].
#[inline]
pub unsafe fn speed_scalar_f32(
    prev: *const f32,
    curr: *const f32,
    out: *mut f32,
    len: usize,
    time_delta: f32,
) {
    speed_scaled_scalar_f32(prev, curr, out, len, 1.0 / time_delta);
}

#[inline]
pub(crate) unsafe fn speed_scaled_scalar_f32(
    prev: *const f32,
    curr: *const f32,
    out: *mut f32,
    len: usize,
    inv_dt: f32,
) {
    for i in 0..len {
        *out.add(i) = (*curr.add(i) - *prev.add(i)) * inv_dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_tenth_of_a_second() {
        let prev = [0.0f32, 10.0, 25.0, 45.0, 70.0, 100.0];
        let curr = [5.0f32, 20.0, 40.0, 65.0, 95.0, 130.0];
        let mut speeds = [0.0f32; 6];

        unsafe { speed_f32(prev.as_ptr(), curr.as_ptr(), speeds.as_mut_ptr(), 6, 0.1) }

        let expected = [50.0f32, 100.0, 150.0, 200.0, 250.0, 300.0];
        for (got, want) in speeds.iter().zip(expected) {
            assert!((got - want).abs() < 1e-3, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_speed_lane_matches_tail() {
        // Same delta in every slot: lane and tail results must be bit-equal
        let prev = [1.0f32; 9];
        let curr = [1.7f32; 9];
        let mut speeds = [0.0f32; 9];

        unsafe { speed_f32(prev.as_ptr(), curr.as_ptr(), speeds.as_mut_ptr(), 9, 0.3) }

        for s in &speeds[1..] {
            assert_eq!(s.to_bits(), speeds[0].to_bits());
        }
    }

    #[test]
    fn test_speed_zero_delta_is_not_guarded() {
        let prev = [0.0f32, 1.0, 1.0, 0.0];
        let curr = [1.0f32, 0.0, 1.0, 0.0];
        let mut speeds = [0.0f32; 4];

        unsafe { speed_f32(prev.as_ptr(), curr.as_ptr(), speeds.as_mut_ptr(), 4, 0.0) }

        assert_eq!(speeds[0], f32::INFINITY);
        assert_eq!(speeds[1], f32::NEG_INFINITY);
        assert!(speeds[2].is_nan());
        assert!(speeds[3].is_nan());
    }
}
