//! Integration tests for reductions (weighted average, dot product, arg-min)

mod common;

use approx::assert_relative_eq;
use common::{integer_samples, random_samples};
use lanekit::error::Error;
use lanekit::ops::{argmin, argmin_checked, cross_correlation, dot, weighted_average};

// ============================================================================
// Weighted Average Tests
// ============================================================================

#[test]
fn test_weighted_average_equal_weights_is_mean() {
    let avg = weighted_average(&[2.0, 4.0, 6.0, 8.0], &[1.0, 1.0, 1.0, 1.0]).unwrap();
    assert_eq!(avg, 5.0);
}

#[test]
fn test_weighted_average_equal_weights_any_length() {
    for len in 1..=29 {
        let values = random_samples(len as u64, len, -50.0, 50.0);
        let weights = vec![0.5f32; len];

        let avg = weighted_average(&values, &weights).unwrap();
        let mean = values.iter().map(|&v| v as f64).sum::<f64>() / len as f64;

        assert_relative_eq!(avg as f64, mean, epsilon = 1e-3);
    }
}

#[test]
fn test_weighted_average_sensor_weights() {
    let values = [10.0f32, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0];
    let weights = [0.1f32, 0.2, 0.3, 0.15, 0.1, 0.05, 0.05, 0.05];

    let avg = weighted_average(&values, &weights).unwrap();

    // 35.5 / 1.0
    assert_relative_eq!(avg, 35.5, epsilon = 1e-4);
}

#[test]
fn test_weighted_average_fallbacks() {
    assert_eq!(weighted_average(&[], &[]).unwrap(), 0.0);
    assert_eq!(weighted_average(&[1.0, 2.0], &[0.0, 0.0]).unwrap(), 0.0);
    assert_eq!(
        weighted_average(&[1.0, 2.0, 3.0, 4.0, 5.0], &[1.0, -1.0, 1.0, -1.0, -1.0]).unwrap(),
        0.0
    );
}

#[test]
fn test_weighted_average_length_mismatch() {
    let err = weighted_average(&[1.0, 2.0, 3.0], &[1.0, 1.0]).unwrap_err();
    assert_eq!(err, Error::shape_mismatch("weights", 3, 2));
}

// ============================================================================
// Dot Product Tests
// ============================================================================

#[test]
fn test_self_dot_is_energy() {
    for len in [0usize, 1, 3, 4, 5, 8, 17, 64, 131] {
        let signal = integer_samples(len as u64 + 100, len);
        let energy: f32 = signal.iter().map(|x| x * x).sum();
        assert_eq!(dot(&signal, &signal).unwrap(), energy, "len {len}");
    }
}

#[test]
fn test_self_dot_bounds_any_equal_energy_signal() {
    let signal = random_samples(21, 50, -1.0, 1.0);
    let energy = dot(&signal, &signal).unwrap();

    // Reversed copy has the same energy; Cauchy-Schwarz bounds its dot product
    let reversed: Vec<f32> = signal.iter().rev().copied().collect();
    let cross = dot(&signal, &reversed).unwrap();

    assert!(cross <= energy + 1e-4, "cross {cross} > energy {energy}");
}

#[test]
fn test_cross_correlation_is_single_lag_dot() {
    let s1 = [1.0f32, 2.0, 3.0, 4.0, 5.0, 4.0, 3.0, 2.0];
    let s2 = [0.5f32, 1.0, 1.5, 2.0, 2.5, 2.0, 1.5, 1.0];

    assert_eq!(cross_correlation(&s1, &s2).unwrap(), 42.0);
    assert_eq!(cross_correlation(&s1, &s2).unwrap(), dot(&s1, &s2).unwrap());
}

#[test]
fn test_dot_length_mismatch() {
    assert!(dot(&[1.0], &[1.0, 2.0]).is_err());
    assert!(cross_correlation(&[1.0, 2.0], &[]).is_err());
}

// ============================================================================
// Arg-min Tests
// ============================================================================

#[test]
fn test_argmin_sensor_frame() {
    let data = [5.2f32, 3.1, 8.7, 1.4, 6.9, 2.3, 9.1, 0.8, 4.5];
    let idx = argmin(&data);
    assert_eq!(idx, 7);
    assert_eq!(data[idx], 0.8);
}

#[test]
fn test_argmin_is_minimal_and_first() {
    for len in 1..=40 {
        // Small value range forces plenty of ties
        let data: Vec<f32> = integer_samples(len as u64 + 500, len)
            .into_iter()
            .map(|x| (x / 8.0).floor())
            .collect();

        let idx = argmin(&data);

        assert!(data.iter().all(|&v| data[idx] <= v), "len {len}");
        let first = data.iter().position(|&v| v == data[idx]).unwrap();
        assert_eq!(idx, first, "len {len}: tie must resolve to lowest index");
    }
}

#[test]
fn test_argmin_ties_in_different_lanes() {
    let mut data = vec![9.0f32; 16];
    data[13] = -2.0;
    data[6] = -2.0;
    data[11] = -2.0;
    assert_eq!(argmin(&data), 6);
}

#[test]
fn test_argmin_empty_sentinel() {
    assert_eq!(argmin(&[]), 0);
    assert_eq!(argmin_checked(&[]), None);
}
