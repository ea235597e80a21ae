//! # lanekit
//!
//! **4-lane SIMD kernels for fixed-length streams of `f32` samples.**
//!
//! lanekit processes sensor frames and tracked-point coordinates with small,
//! stateless kernels. Each kernel works through the stream in groups of 4
//! lanes (NEON on AArch64, SSE4.1 + FMA on x86-64) and finishes the
//! `len % 4` remainder with scalar code using the same arithmetic.
//!
//! ## Kernels
//!
//! - **Elementwise**: squared point distance, speed from position deltas,
//!   threshold detection
//! - **Reductions**: weighted average, dot product ("cross-correlation"),
//!   arg-min with lowest-index tie-breaking
//! - **Prefix / recurrence**: cumulative sum, exponential moving average
//! - **Windowed**: causal moving-average filter
//!
//! No kernel allocates, keeps state between calls, or calls another kernel.
//!
//! ## Quick Start
//!
//! ```rust
//! use lanekit::prelude::*;
//!
//! let mut sums = [0.0f32; 5];
//! cumulative_sum(&[1.0, 2.0, 3.0, 4.0, 5.0], &mut sums)?;
//! assert_eq!(sums, [1.0, 3.0, 6.0, 10.0, 15.0]);
//!
//! let avg = weighted_average(&[2.0, 4.0, 6.0, 8.0], &[1.0; 4])?;
//! assert_eq!(avg, 5.0);
//! # Ok::<(), lanekit::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `simd` (default): runtime SIMD dispatch. Without it every kernel runs
//!   its scalar fallback.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod kernels;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::kernels::simd::{detect_simd, SimdLevel};
    pub use crate::ops::*;
}
