//! Errors for loading values from external representations.

use std::num::ParseFloatError;
use thiserror::Error;

/// Failure to build a math value from data supplied by a collaborator.
///
/// Numeric domain problems such as division by zero are not reported here.
/// They propagate as NaN or infinity and are detected with the `is_valid`
/// methods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Expected {expected} components but got {found}")]
    ComponentCount { expected: usize, found: usize },

    #[error("Expected {expected} bytes but got {found}")]
    ByteCount { expected: usize, found: usize },

    #[error("Failed to parse component {index}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: ParseFloatError,
    },

    #[error("Cannot average an empty collection")]
    EmptyCollection,
}
