//! Operation counting for the elimination solvers.

/// Passive record of the scalar operations performed during a solve.
///
/// A fresh `OpCount` is created per solve invocation, only ever incremented
/// while the solve runs, and reported once at completion by the
/// `*_with_counts` entry points. Nothing is shared across calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCount {
    /// Row swaps performed by partial pivoting
    pub swaps: usize,
    /// Scalar additions and subtractions
    pub addsub: usize,
    /// Scalar multiplications and divisions
    pub muldiv: usize,
}
