//! Direct solvers for dense linear systems
//!
//! This crate provides non-iterative solvers for dense square systems of
//! linear equations: Gaussian elimination with partial pivoting, Gauss-Jordan
//! reduction, and LU factorization with triangular-system solving. It targets
//! small-to-medium systems where numerical stability from pivoting matters
//! more than asymptotic performance.
//!
//! # Features
//!
//! - **Gaussian elimination**: partial pivoting, forward elimination, back
//!   substitution
//! - **Gauss-Jordan**: full reduction, solution read straight off the
//!   augmented column
//! - **LU**: factorization without pivoting, reusable across right-hand sides
//! - **Operation counts**: `_with_counts` variants report row swaps, add/sub
//!   and mul/div totals per solve
//! - **Generic scalars**: works with `f64` and `f32`
//!
//! Every solver deep-copies its input; callers' matrices are never mutated.
//!
//! # Example
//!
//! ```
//! use dense_solvers::{DEFAULT_TOLERANCE, build_augmented, gaussian_eliminate};
//! use ndarray::array;
//!
//! let a = array![[2.0, 1.0, -1.0], [-3.0, -1.0, 2.0], [-2.0, 1.0, 2.0]];
//! let b = array![8.0, -11.0, -3.0];
//!
//! let ab = build_augmented(&a, &b).unwrap();
//! let x = gaussian_eliminate(&ab, DEFAULT_TOLERANCE).unwrap();
//!
//! assert!((x[0] - 2.0).abs() < 1e-9);
//! assert!((x[1] - 3.0).abs() < 1e-9);
//! assert!((x[2] + 1.0).abs() < 1e-9);
//! ```

pub mod augmented;
pub mod counter;
pub mod direct;
pub mod error;
pub mod row_ops;

/// Default numerical-zero tolerance for pivot and singularity decisions.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

// Re-export main types
pub use counter::OpCount;
pub use error::{Result, SolveError};

// Re-export direct solvers
pub use direct::{
    LuFactors, gauss_jordan, gauss_jordan_with_counts, gaussian_eliminate,
    gaussian_eliminate_with_counts, gaussian_solve, lu_factorize, lu_solve,
};

// Re-export matrix helpers
pub use augmented::{build_augmented, split_augmented};
pub use row_ops::select_pivot;
