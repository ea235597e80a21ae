//! ARM64 implementations

pub(super) mod neon;
