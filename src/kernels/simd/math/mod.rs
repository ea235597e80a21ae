//! Horizontal reduction helpers shared by the lane kernels
//!
//! Each backend collapses a 4-lane accumulator as `(l0 + l1) + (l2 + l3)`.

#[cfg(target_arch = "x86_64")]
pub(crate) mod sse;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;
