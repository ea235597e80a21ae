//! Elementwise operations: squared distance, speed, threshold detection

use super::validation::{validate_output_len, validate_same_len};
use crate::error::Result;
use crate::kernels::simd::{binary, compare, distance};

pub use crate::kernels::simd::distance::{distance_squared_x4, Point4};

/// Squared Euclidean distance between point pairs.
///
/// Points are given as parallel coordinate slices; `out[i]` receives
/// `(x2[i] - x1[i])² + (y2[i] - y1[i])²`.
///
/// # Errors
///
/// - `ShapeMismatch` if any coordinate slice differs in length from `x1`
/// - `InvalidArgument` if `out` is shorter than `x1`
pub fn distance_squared(
    x1: &[f32],
    y1: &[f32],
    x2: &[f32],
    y2: &[f32],
    out: &mut [f32],
) -> Result<()> {
    let len = x1.len();
    validate_same_len("y1", len, y1.len())?;
    validate_same_len("x2", len, x2.len())?;
    validate_same_len("y2", len, y2.len())?;
    validate_output_len("out", len, out.len(), "distance_squared")?;

    unsafe {
        distance::distance_squared_f32(
            x1.as_ptr(),
            y1.as_ptr(),
            x2.as_ptr(),
            y2.as_ptr(),
            out.as_mut_ptr(),
            len,
        );
    }
    Ok(())
}

/// Speed from two position snapshots taken `time_delta` seconds apart.
///
/// `time_delta == 0` is not rejected; the result follows IEEE-754.
///
/// # Errors
///
/// - `ShapeMismatch` if `curr` differs in length from `prev`
/// - `InvalidArgument` if `speeds` is shorter than `prev`
pub fn speed(prev: &[f32], curr: &[f32], speeds: &mut [f32], time_delta: f32) -> Result<()> {
    let len = prev.len();
    validate_same_len("curr", len, curr.len())?;
    validate_output_len("speeds", len, speeds.len(), "speed")?;

    unsafe { binary::speed_f32(prev.as_ptr(), curr.as_ptr(), speeds.as_mut_ptr(), len, time_delta) }
    Ok(())
}

/// Flags samples strictly above `threshold` with `1`, all others with `0`.
///
/// # Errors
///
/// `InvalidArgument` if `detections` is shorter than `data`.
pub fn threshold_detection(data: &[f32], detections: &mut [u8], threshold: f32) -> Result<()> {
    let len = data.len();
    validate_output_len("detections", len, detections.len(), "threshold_detection")?;

    unsafe { compare::threshold_f32(data.as_ptr(), detections.as_mut_ptr(), len, threshold) }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_distance_squared_rejects_ragged_coordinates() {
        let a = [0.0f32; 4];
        let short = [0.0f32; 3];
        let mut out = [0.0f32; 4];

        let err = distance_squared(&a, &a, &short, &a, &mut out).unwrap_err();
        assert_eq!(err, Error::shape_mismatch("x2", 4, 3));
    }

    #[test]
    fn test_speed_rejects_short_output() {
        let p = [0.0f32; 5];
        let mut out = [0.0f32; 4];
        assert!(speed(&p, &p, &mut out, 1.0).is_err());
    }

    #[test]
    fn test_threshold_leaves_extra_output_untouched() {
        let data = [1.0f32, 5.0];
        let mut flags = [7u8; 3];

        threshold_detection(&data, &mut flags, 3.0).unwrap();

        assert_eq!(flags, [0, 1, 7]);
    }
}
