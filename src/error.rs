//! Error types for the direct solvers.
//!
//! All solvers share one error enum: shape-contract violations are reported
//! eagerly, before any working copy is allocated, and singularity is reported
//! as soon as it is detected. Failures are terminal for the current solve;
//! these are deterministic methods, so a retry with the same input fails the
//! same way.

use thiserror::Error;

/// Errors that can occur while solving a dense linear system.
#[derive(Debug, Error)]
pub enum SolveError {
    /// No usable pivot was found, or a diagonal entry was (near-)zero at a
    /// point requiring nonzero division. The system has no unique solution.
    #[error("system is singular: no unique solution")]
    SingularSystem,

    /// Input shape violates the `n x (n + 1)` augmented contract, the square
    /// contract, or a matrix/vector row-count match.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected dimension
        expected: usize,
        /// Actual dimension provided
        got: usize,
    },
}

/// A specialized `Result` type for solver operations.
pub type Result<T> = std::result::Result<T, SolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singular_display() {
        let err = SolveError::SingularSystem;
        assert_eq!(err.to_string(), "system is singular: no unique solution");
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = SolveError::DimensionMismatch {
            expected: 4,
            got: 3,
        };
        assert_eq!(err.to_string(), "dimension mismatch: expected 4, got 3");
    }
}
