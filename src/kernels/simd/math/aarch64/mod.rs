//! ARM64 horizontal reductions

pub(crate) mod neon;
