//! Utilities for benchmarking the math kernel.

pub mod benchmark;

#[doc(hidden)]
pub use pastey;
