//! next-odd computes the smallest odd integer strictly greater than the
//! truncated integer part of a number.
//!
//! This crate provides a library interface to the computation and the demo
//! harness used by the `next-odd` binary.

pub mod demo;
pub mod errors;
pub mod models;
pub mod odd;

// Re-export commonly used types for convenience
pub use errors::NextOddError;
pub use models::{Evaluation, EvaluationReport};
pub use odd::{next_odd, next_odd_int, next_odd_value, parse_number};

// Tests are defined in their respective modules with #[cfg(test)]
