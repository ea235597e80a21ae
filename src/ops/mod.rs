//! Safe sample operations
//!
//! Slice-based wrappers over [`crate::kernels`]. Each wrapper checks the
//! buffer-length contract of its kernel and then runs the kernel; numeric
//! contracts (`time_delta != 0`, `0 < alpha < 1`) are left to IEEE-754.
//!
//! ```text
//! elementwise   distance_squared, distance_squared_x4, speed, threshold_detection
//! reduce        weighted_average, dot, cross_correlation, argmin, argmin_checked
//! sequential    cumulative_sum, exponential_moving_average
//! window        moving_average
//! ```

mod elementwise;
mod reduce;
mod sequential;
mod validation;
mod window;

pub use elementwise::{distance_squared, distance_squared_x4, speed, threshold_detection, Point4};
pub use reduce::{argmin, argmin_checked, cross_correlation, dot, weighted_average};
pub use sequential::{cumulative_sum, exponential_moving_average};
pub use window::moving_average;
