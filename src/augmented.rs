//! Augmented-matrix construction and splitting.
//!
//! Thin collaborators around the eliminators: [`build_augmented`] appends the
//! right-hand side as an extra column, [`split_augmented`] takes it back off.
//! Both are pure, allocate new arrays, and check nothing beyond that the
//! dimensions line up.

use crate::error::{Result, SolveError};
use ndarray::{Array1, Array2, s};
use num_traits::Float;

/// Append `b` as the last column of `a`, producing the `n x (n + 1)`
/// augmented matrix the eliminators consume.
pub fn build_augmented<T: Float>(a: &Array2<T>, b: &Array1<T>) -> Result<Array2<T>> {
    if b.len() != a.nrows() {
        return Err(SolveError::DimensionMismatch {
            expected: a.nrows(),
            got: b.len(),
        });
    }

    let (rows, cols) = a.dim();
    let mut ab = Array2::zeros((rows, cols + 1));
    ab.slice_mut(s![.., ..cols]).assign(a);
    ab.slice_mut(s![.., cols]).assign(b);
    Ok(ab)
}

/// Split an `n x (n + 1)` augmented matrix back into the coefficient matrix
/// and the right-hand-side vector.
pub fn split_augmented<T: Float>(ab: &Array2<T>) -> Result<(Array2<T>, Array1<T>)> {
    let n = augmented_order(ab)?;
    let a = ab.slice(s![.., ..n]).to_owned();
    let b = ab.column(n).to_owned();
    Ok((a, b))
}

/// Check the `n x (n + 1)` augmented shape and return `n`.
pub(crate) fn augmented_order<T>(ab: &Array2<T>) -> Result<usize> {
    let n = ab.nrows();
    if ab.ncols() != n + 1 {
        return Err(SolveError::DimensionMismatch {
            expected: n + 1,
            got: ab.ncols(),
        });
    }
    Ok(n)
}
