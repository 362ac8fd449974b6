//! Gaussian elimination with partial pivoting
//!
//! Reduces the augmented matrix to upper-triangular form, swapping the
//! largest-magnitude candidate into the pivot position at every column, then
//! recovers the solution by back substitution.

use crate::augmented::{augmented_order, build_augmented};
use crate::counter::OpCount;
use crate::error::{Result, SolveError};
use crate::row_ops::{select_pivot, subtract_scaled, swap_rows};
use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};

/// Solve an augmented system by Gaussian elimination with partial pivoting.
///
/// `augmented` must be `n x (n + 1)` with the right-hand side in the last
/// column; the input is copied and never mutated. Entries with absolute
/// value below `tolerance` are treated as exactly zero for pivot selection,
/// elimination skip decisions, and the final singularity check.
pub fn gaussian_eliminate<T>(augmented: &Array2<T>, tolerance: T) -> Result<Array1<T>>
where
    T: Float + NumAssign,
{
    gaussian_eliminate_with_counts(augmented, tolerance).map(|(x, _)| x)
}

/// Same as [`gaussian_eliminate`], additionally reporting the scalar
/// operation counts accumulated during the solve.
pub fn gaussian_eliminate_with_counts<T>(
    augmented: &Array2<T>,
    tolerance: T,
) -> Result<(Array1<T>, OpCount)>
where
    T: Float + NumAssign,
{
    let n = augmented_order(augmented)?;
    let mut ab = augmented.to_owned();
    let mut counts = OpCount::default();

    if n == 0 {
        return Ok((Array1::zeros(0), counts));
    }

    // Forward elimination, one column at a time.
    for i in 0..n - 1 {
        let p = select_pivot(&ab, i, i, tolerance)?;
        if p != i {
            log::debug!("swapping rows {} and {}", i, p);
            swap_rows(&mut ab, i, p);
            counts.swaps += 1;
        }

        for j in i + 1..n {
            if ab[[j, i]].abs() < tolerance {
                continue;
            }
            counts.muldiv += 1;
            let m = ab[[j, i]] / ab[[i, i]];
            subtract_scaled(&mut ab, j, i, m, i, &mut counts);
        }
    }

    if ab[[n - 1, n - 1]].abs() < tolerance {
        log::debug!("degenerate pivot in the last row");
        return Err(SolveError::SingularSystem);
    }

    // Back substitution.
    let mut x = Array1::zeros(n);
    counts.muldiv += 1;
    x[n - 1] = ab[[n - 1, n]] / ab[[n - 1, n - 1]];

    for i in (0..n - 1).rev() {
        let mut sum = T::zero();
        for j in i + 1..n {
            counts.muldiv += 1;
            counts.addsub += 1;
            sum += ab[[i, j]] * x[j];
        }
        counts.addsub += 1;
        counts.muldiv += 1;
        x[i] = (ab[[i, n]] - sum) / ab[[i, i]];
    }

    Ok((x, counts))
}

/// Build the augmented matrix from `a` and `b`, then solve by Gaussian
/// elimination.
///
/// This is a convenience wrapper combining [`build_augmented`] and
/// [`gaussian_eliminate`].
pub fn gaussian_solve<T>(a: &Array2<T>, b: &Array1<T>, tolerance: T) -> Result<Array1<T>>
where
    T: Float + NumAssign,
{
    let ab = build_augmented(a, b)?;
    gaussian_eliminate(&ab, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_classic_3x3() {
        let ab = array![
            [2.0_f64, 1.0, -1.0, 8.0],
            [-3.0, -1.0, 2.0, -11.0],
            [-2.0, 1.0, 2.0, -3.0],
        ];

        let x = gaussian_eliminate(&ab, TOL).expect("system is nonsingular");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 3.0, epsilon = 1e-9);
        assert_relative_eq!(x[2], -1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_pivot_recovers_via_swap() {
        let ab = array![[0.0_f64, 1.0, 1.0], [1.0, 1.0, 3.0]];

        let (x, counts) =
            gaussian_eliminate_with_counts(&ab, TOL).expect("row swap selects the nonzero pivot");

        assert_relative_eq!(x[0], 2.0, epsilon = 1e-9);
        assert_relative_eq!(x[1], 1.0, epsilon = 1e-9);
        assert_eq!(counts.swaps, 1);
    }

    #[test]
    fn test_singular_zero_column() {
        let ab = array![[1.0_f64, 0.0, 5.0], [2.0, 0.0, 7.0]];

        let result = gaussian_eliminate(&ab, TOL);
        assert!(matches!(result, Err(SolveError::SingularSystem)));
    }

    #[test]
    fn test_rejects_square_input() {
        let ab = array![[1.0_f64, 2.0], [3.0, 4.0]];

        let result = gaussian_eliminate(&ab, TOL);
        assert!(matches!(
            result,
            Err(SolveError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn test_exact_counts_2x2() {
        // One multiplier divide and three multiply/subtract pairs in
        // elimination; two divides, one multiply and two add/subs in back
        // substitution.
        let ab = array![[2.0_f64, 1.0, 3.0], [1.0, 3.0, 5.0]];

        let (x, counts) = gaussian_eliminate_with_counts(&ab, TOL).expect("nonsingular");

        assert_relative_eq!(x[0], 0.8, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.4, epsilon = 1e-12);
        assert_eq!(counts.swaps, 0);
        assert_eq!(counts.muldiv, 7);
        assert_eq!(counts.addsub, 5);
    }

    #[test]
    fn test_no_swap_when_diagonally_dominant() {
        let ab = array![
            [10.0_f64, 2.0, 3.0, 1.0],
            [4.0, 12.0, 1.0, 2.0],
            [2.0, 1.0, 9.0, 3.0],
        ];

        let (_, counts) = gaussian_eliminate_with_counts(&ab, TOL).expect("nonsingular");
        assert_eq!(counts.swaps, 0);
    }

    #[test]
    fn test_single_unknown() {
        let ab = array![[4.0_f64, 8.0]];

        let x = gaussian_eliminate(&ab, TOL).expect("nonsingular");
        assert_relative_eq!(x[0], 2.0);
    }

    #[test]
    fn test_empty_system() {
        let ab = Array2::<f64>::zeros((0, 1));

        let (x, counts) = gaussian_eliminate_with_counts(&ab, TOL).expect("trivially solvable");
        assert_eq!(x.len(), 0);
        assert_eq!(counts, OpCount::default());
    }

    #[test]
    fn test_input_not_mutated() {
        let ab = array![[2.0_f64, 1.0, 3.0], [1.0, 3.0, 5.0]];
        let original = ab.clone();

        gaussian_eliminate(&ab, TOL).expect("nonsingular");
        assert_eq!(ab, original);
    }

    #[test]
    fn test_gaussian_solve_residual() {
        let a = array![[3.0_f64, 2.0, -1.0], [2.0, -2.0, 4.0], [-1.0, 0.5, -1.0]];
        let b = array![1.0_f64, -2.0, 0.0];

        let x = gaussian_solve(&a, &b, TOL).expect("nonsingular");

        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-9);
        }
    }
}
