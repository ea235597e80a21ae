//! Raw sample kernels
//!
//! Low-level, allocation-free kernels over caller-owned buffers passed as
//! pointer + length. Lane-parallel kernels live in [`simd`] and dispatch on
//! the detected [`simd::SimdLevel`]; strictly sequential recurrences live in
//! [`recurrence`].
//!
//! Prefer the slice-based wrappers in [`crate::ops`] unless the buffers are
//! already raw pointers.

#![allow(unsafe_op_in_unsafe_fn)] // Kernels are already marked unsafe, inner unsafe is redundant

pub mod recurrence;
pub mod simd;

// Re-export all kernel functions for convenient access
pub use recurrence::ema_f32;
pub use simd::binary::speed_f32;
pub use simd::compare::threshold_f32;
pub use simd::cumulative::cumsum_f32;
pub use simd::distance::{distance_squared_f32, distance_squared_x4, Point4};
pub use simd::index::argmin_f32;
pub use simd::reduce::{cross_correlation_f32, dot_f32, weighted_average_f32};
pub use simd::window::moving_average_f32;
pub use simd::{detect_simd, SimdLevel};
