//! SIMD detection and dispatch for the sample kernels
//!
//! This module provides runtime CPU feature detection. Each kernel family
//! (distance, reduce, cumulative, ...) has its own submodule with SIMD
//! kernels and a scalar fallback.
//!
//! # Module Structure
//!
//! ```text
//! simd/
//! ├── mod.rs              # This file: detection only
//! ├── {operation}/        # Each kernel family
//! │   ├── mod.rs          # Unified dispatch + scalar fallback
//! │   ├── sse.rs          # x86-64 SSE + FMA (128-bit)
//! │   └── aarch64/        # ARM64 implementations
//! │       ├── mod.rs
//! │       └── neon.rs
//! ```
//!
//! # Architecture Support
//!
//! Every backend works on 4 f32 lanes so that lane grouping, carry order and
//! tie-breaking are identical regardless of the CPU the kernel runs on.
//!
//! | Architecture | Instruction Set | Vector Width | Status    |
//! |--------------|-----------------|--------------|-----------|
//! | x86-64       | SSE4.1 + FMA    | 128 bits     | Supported |
//! | ARM64        | NEON            | 128 bits     | Supported |
//! | Any          | Scalar          | N/A          | Fallback  |

pub mod binary;
pub mod compare;
pub mod cumulative;
pub mod distance;
pub mod index;
pub(crate) mod math;
pub mod reduce;
pub mod window;

use std::sync::OnceLock;

/// Number of f32 lanes processed per vector step on every SIMD backend
pub const LANES: usize = 4;

/// SIMD capability level detected at runtime
///
/// Note: All variants are defined on all platforms for API completeness,
/// but some are only constructed at runtime on their respective architectures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[allow(dead_code)] // Variants may not be constructed on all architectures
pub enum SimdLevel {
    /// SSE4.1 with FMA on x86-64 (128-bit vectors, 4 f32s)
    SseFma = 2,
    /// NEON baseline for AArch64 (128-bit vectors, 4 f32s)
    Neon = 1,
    /// Scalar fallback (no SIMD)
    Scalar = 0,
}

impl SimdLevel {
    /// Returns true if this is an x86-64 SIMD level
    #[inline]
    pub const fn is_x86(self) -> bool {
        matches!(self, Self::SseFma)
    }

    /// Returns true if this is an ARM64 SIMD level
    #[inline]
    pub const fn is_arm64(self) -> bool {
        matches!(self, Self::Neon)
    }

    /// Returns the number of f32 elements per vector step
    #[inline]
    pub const fn f32_lanes(self) -> usize {
        match self {
            Self::SseFma | Self::Neon => LANES,
            Self::Scalar => 1,
        }
    }

    /// Returns the name of this SIMD level as a string
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SseFma => "SSE+FMA",
            Self::Neon => "NEON",
            Self::Scalar => "Scalar",
        }
    }
}

impl std::fmt::Display for SimdLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cached SIMD level detection
static SIMD_LEVEL: OnceLock<SimdLevel> = OnceLock::new();

/// Detect the best available SIMD level for the current CPU
///
/// This function is cached - the first call performs detection,
/// subsequent calls return the cached result.
#[inline]
pub fn detect_simd() -> SimdLevel {
    *SIMD_LEVEL.get_or_init(|| {
        let level = detect_simd_uncached();
        log::debug!("lanekit kernels dispatching to {level}");
        level
    })
}

/// Perform actual CPU feature detection (called once)
#[cold]
#[cfg(feature = "simd")]
fn detect_simd_uncached() -> SimdLevel {
    #[cfg(target_arch = "x86_64")]
    {
        // SSE2 is baseline on x86-64; the lane kernels also need blendv and FMA
        if is_x86_feature_detected!("sse4.1") && is_x86_feature_detected!("fma") {
            return SimdLevel::SseFma;
        }
        log::debug!("x86-64 CPU lacks SSE4.1/FMA, using scalar kernels");
    }

    #[cfg(target_arch = "aarch64")]
    {
        // NEON is mandatory for AArch64 - always available
        return SimdLevel::Neon;
    }

    SimdLevel::Scalar
}

#[cold]
#[cfg(not(feature = "simd"))]
fn detect_simd_uncached() -> SimdLevel {
    SimdLevel::Scalar
}
