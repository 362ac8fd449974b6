//! Direct solvers for dense linear systems
//!
//! Non-iterative methods that reduce the system in a fixed number of steps:
//! - [`gaussian_eliminate`]: Gaussian elimination with partial pivoting
//! - [`gauss_jordan`]: Gauss-Jordan reduction to the identity
//! - [`lu_factorize`] / [`lu_solve`]: LU factorization without pivoting,
//!   with forward/back triangular solves

mod gauss_jordan;
mod gaussian;
mod lu;

pub use gauss_jordan::{gauss_jordan, gauss_jordan_with_counts};
pub use gaussian::{gaussian_eliminate, gaussian_eliminate_with_counts, gaussian_solve};
pub use lu::{LuFactors, lu_factorize, lu_solve};
