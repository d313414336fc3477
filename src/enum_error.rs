//! EnumError: Unified error type for index-sieve public APIs
//!
//! This error type is used throughout the index-sieve library to provide robust,
//! non-panicking error handling for all public APIs.

use thiserror::Error;

/// Unified error type for index-sieve operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnumError {
    /// Attempted to construct a scheme over zero dimensions.
    #[error("enumeration dimension must be positive (got 0)")]
    ZeroDimension,
    /// Attempted to construct the anisotropic scheme from an empty weight vector.
    #[error("weight vector must not be empty")]
    EmptyWeight,
    /// The truncation exponent q must lie in (0, 1].
    #[error("truncation exponent q must lie in (0, 1] (got {0})")]
    InvalidQ(f64),
    /// Per-dimension weights must be non-negative.
    #[error("weight for dimension {dim} must be non-negative (got {value})")]
    NegativeWeight {
        /// Offending dimension.
        dim: usize,
        /// Offending value.
        value: f64,
    },
    /// A multi-index was supplied whose length differs from the scheme's dimension.
    #[error("multi-index has {got} components but the scheme has dimension {expected}")]
    DimensionMismatch {
        /// The scheme's fixed dimension.
        expected: usize,
        /// Length of the supplied multi-index.
        got: usize,
    },
    /// An internal data-structure invariant was violated (cache ordering,
    /// duplicate ranks, strata bookkeeping). Indicates a bug, not bad input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}
