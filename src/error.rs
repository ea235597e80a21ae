//! Error types for lanekit
//!
//! Kernels never fail. Errors are raised only by the safe [`crate::ops`]
//! layer when caller-provided buffers cannot satisfy a kernel's memory
//! contract.

use thiserror::Error;

/// Result type alias using lanekit's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lanekit operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer length mismatch between operands
    #[error("Shape mismatch for '{arg}': expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// The offending argument
        arg: &'static str,
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(arg: &'static str, expected: usize, got: usize) -> Self {
        Self::ShapeMismatch { arg, expected, got }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
