//! Gauss-Jordan reduction
//!
//! Reduces the augmented matrix all the way to the identity on the
//! coefficient block: every pivot row is normalized to a unit pivot and the
//! pivot column is eliminated both above and below the diagonal. The
//! solution is read straight off the augmented column, with no separate
//! back-substitution phase.

use crate::augmented::augmented_order;
use crate::counter::OpCount;
use crate::error::{Result, SolveError};
use crate::row_ops::{normalize_row, select_pivot, subtract_scaled, swap_rows};
use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};

/// Solve an augmented system by Gauss-Jordan reduction.
///
/// `augmented` must be `n x (n + 1)` with the right-hand side in the last
/// column; the input is copied and never mutated. `tolerance` plays the same
/// role as in [`gaussian_eliminate`](crate::gaussian_eliminate).
pub fn gauss_jordan<T>(augmented: &Array2<T>, tolerance: T) -> Result<Array1<T>>
where
    T: Float + NumAssign,
{
    gauss_jordan_with_counts(augmented, tolerance).map(|(x, _)| x)
}

/// Same as [`gauss_jordan`], additionally reporting the scalar operation
/// counts accumulated during the solve.
pub fn gauss_jordan_with_counts<T>(
    augmented: &Array2<T>,
    tolerance: T,
) -> Result<(Array1<T>, OpCount)>
where
    T: Float + NumAssign,
{
    let n = augmented_order(augmented)?;
    let mut ab = augmented.to_owned();
    let mut counts = OpCount::default();

    for i in 0..n {
        let p = select_pivot(&ab, i, i, tolerance)?;
        if p != i {
            log::debug!("swapping rows {} and {}", i, p);
            swap_rows(&mut ab, i, p);
            counts.swaps += 1;
        }

        let pivot = ab[[i, i]];
        if pivot.abs() < tolerance {
            return Err(SolveError::SingularSystem);
        }

        normalize_row(&mut ab, i, pivot, i, &mut counts);

        // Eliminate the pivot column in every other row, above and below.
        for j in 0..n {
            if j == i {
                continue;
            }
            let factor = ab[[j, i]];
            if factor.abs() < tolerance {
                continue;
            }
            subtract_scaled(&mut ab, j, i, factor, i, &mut counts);
        }
    }

    Ok((ab.column(n).to_owned(), counts))
}
