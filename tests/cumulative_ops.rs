//! Integration tests for prefix and recurrence operations (cumsum, EMA)
//!
//! Tests verify correctness across:
//! - Every tail length around the 4-lane groups
//! - Output buffers longer than the input
//! - Empty input
//! - Frame-to-frame continuity handled by the caller

mod common;

use approx::assert_relative_eq;
use common::{assert_allclose_f32, integer_samples, random_samples};
use lanekit::error::Error;
use lanekit::ops::{cumulative_sum, exponential_moving_average};

// ============================================================================
// Cumsum Tests
// ============================================================================

#[test]
fn test_cumsum_one_to_ten() {
    let input: Vec<f32> = (1..=10).map(|x| x as f32).collect();
    let mut output = vec![0.0f32; 10];

    cumulative_sum(&input, &mut output).unwrap();

    assert_eq!(
        output,
        [1.0, 3.0, 6.0, 10.0, 15.0, 21.0, 28.0, 36.0, 45.0, 55.0]
    );
}

#[test]
fn test_cumsum_prefix_property_all_lengths() {
    for len in 0..=33 {
        let input = integer_samples(len as u64, len);
        let mut output = vec![f32::NAN; len];

        cumulative_sum(&input, &mut output).unwrap();

        let mut running = 0.0f32;
        for i in 0..len {
            running += input[i];
            assert_eq!(output[i], running, "len {len}, index {i}");
        }
    }
}

#[test]
fn test_cumsum_fractional_within_tolerance() {
    let input = random_samples(7, 1001, -1.0, 1.0);
    let mut output = vec![0.0f32; input.len()];

    cumulative_sum(&input, &mut output).unwrap();

    let mut expected = Vec::with_capacity(input.len());
    let mut acc = 0.0f64;
    for &x in &input {
        acc += x as f64;
        expected.push(acc as f32);
    }
    assert_allclose_f32(&output, &expected, 1e-4, 1e-3, "cumsum f32");
}

#[test]
fn test_cumsum_longer_output_keeps_extra_slots() {
    let mut output = [-1.0f32; 7];

    cumulative_sum(&[1.0, 1.0, 1.0, 1.0, 1.0], &mut output).unwrap();

    assert_eq!(output, [1.0, 2.0, 3.0, 4.0, 5.0, -1.0, -1.0]);
}

#[test]
fn test_cumsum_short_output_is_rejected() {
    let mut output = [0.0f32; 2];
    let err = cumulative_sum(&[1.0, 2.0, 3.0], &mut output).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { arg: "output", .. }));
    assert_eq!(output, [0.0, 0.0]);
}

#[test]
fn test_cumsum_empty() {
    let mut output = [5.0f32; 1];
    cumulative_sum(&[], &mut output).unwrap();
    assert_eq!(output, [5.0]);
}

// ============================================================================
// EMA Tests
// ============================================================================

#[test]
fn test_ema_matches_recurrence() {
    let input = random_samples(11, 37, 0.0, 10.0);
    let alpha = 0.25f32;
    let mut output = vec![0.0f32; input.len()];

    exponential_moving_average(&input, &mut output, alpha).unwrap();

    assert_eq!(output[0], input[0]);
    for i in 1..input.len() {
        let expected = alpha * input[i] + (1.0 - alpha) * output[i - 1];
        assert_relative_eq!(output[i], expected, max_relative = 1e-6);
    }
}

#[test]
fn test_ema_caller_carries_state_across_frames() {
    let signal = random_samples(3, 16, -1.0, 1.0);
    let alpha = 0.4f32;

    let mut whole = vec![0.0f32; 16];
    exponential_moving_average(&signal, &mut whole, alpha).unwrap();

    // Second frame restarts from its own first sample
    let mut second = vec![0.0f32; 8];
    exponential_moving_average(&signal[8..], &mut second, alpha).unwrap();
    assert_eq!(second[0], signal[8]);

    // Continuity is the caller's job: prepend the carried value
    let mut carried_input = vec![whole[7]];
    carried_input.extend_from_slice(&signal[8..]);
    let mut carried = vec![0.0f32; 9];
    exponential_moving_average(&carried_input, &mut carried, alpha).unwrap();

    // Frame 2 starts from whole[7] instead of signal[8]
    let mut expected_first = whole[7];
    expected_first = alpha * signal[8] + (1.0 - alpha) * expected_first;
    assert_relative_eq!(carried[1], expected_first, max_relative = 1e-6);
    assert_allclose_f32(&carried[1..], &whole[8..], 1e-5, 1e-6, "carried EMA");
}

#[test]
fn test_ema_empty() {
    let mut output = [1.0f32; 2];
    exponential_moving_average(&[], &mut output, 0.5).unwrap();
    assert_eq!(output, [1.0, 1.0]);
}
