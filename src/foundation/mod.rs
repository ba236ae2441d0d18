//! Shared primitives: colors, sizes, and the crate error type.

pub(crate) mod core;
pub(crate) mod error;
