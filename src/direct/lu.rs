//! LU factorization without pivoting
//!
//! Factors a square matrix into a unit-lower-triangular L and an
//! upper-triangular U, recording the elimination multipliers as it goes.
//! Because no rows are ever swapped, an exactly-zero diagonal entry is fatal
//! even for systems that a pivoting solver would handle.

use crate::error::{Result, SolveError};
use ndarray::{Array1, Array2};
use num_traits::{Float, NumAssign};

/// Triangular factors of a square matrix.
///
/// `l` carries ones on its diagonal and the elimination multipliers below it;
/// `u` is the reduced matrix, with exact zeros below its diagonal.
/// `l.dot(&u)` reproduces the factored matrix up to floating-point error.
#[derive(Debug, Clone)]
pub struct LuFactors<T> {
    /// Lower-triangular factor with unit diagonal
    pub l: Array2<T>,
    /// Upper-triangular factor
    pub u: Array2<T>,
}

impl<T: Float + NumAssign> LuFactors<T> {
    /// Solve `Ax = b` with the precomputed factors.
    ///
    /// See [`lu_solve`] for the contract. The factorization can be reused
    /// across multiple right-hand sides.
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        lu_solve(&self.l, &self.u, b)
    }
}

/// Factor a square matrix into [`LuFactors`] without pivoting.
///
/// An exactly-zero diagonal entry fails with
/// [`SolveError::SingularSystem`] — strict `== 0`, not a tolerance, since
/// without pivoting there is no recovery from it. Large multipliers are not
/// guarded against either; both are inherent limitations of un-pivoted LU.
pub fn lu_factorize<T>(matrix: &Array2<T>) -> Result<LuFactors<T>>
where
    T: Float + NumAssign,
{
    let n = square_order(matrix)?;
    let mut u = matrix.to_owned();
    let mut l = Array2::zeros((n, n));

    for i in 0..n {
        if u[[i, i]] == T::zero() {
            return Err(SolveError::SingularSystem);
        }

        l[[i, i]] = T::one();
        for j in i + 1..n {
            let m = u[[j, i]] / u[[i, i]];
            for k in i + 1..n {
                let s = u[[i, k]];
                u[[j, k]] -= m * s;
            }
            u[[j, i]] = T::zero();
            l[[j, i]] = m;
        }
    }

    if n > 0 && u[[n - 1, n - 1]] == T::zero() {
        return Err(SolveError::SingularSystem);
    }

    Ok(LuFactors { l, u })
}

/// Solve `L U x = b` by forward then back substitution.
///
/// `l` and `u` are trusted as produced by [`lu_factorize`]; no singularity
/// check happens at this layer. A zero diagonal entry in either factor
/// divides through as IEEE infinity/NaN in the returned values rather than
/// an error.
pub fn lu_solve<T>(l: &Array2<T>, u: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>>
where
    T: Float + NumAssign,
{
    let n = square_order(l)?;
    let un = square_order(u)?;
    if un != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: un,
        });
    }
    if b.len() != n {
        return Err(SolveError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    if n == 0 {
        return Ok(Array1::zeros(0));
    }

    // Forward substitution: L y = b.
    let mut y = Array1::zeros(n);
    y[0] = b[0] / l[[0, 0]];
    for i in 1..n {
        let mut sum = T::zero();
        for j in 0..i {
            sum += l[[i, j]] * y[j];
        }
        y[i] = (b[i] - sum) / l[[i, i]];
    }

    // Back substitution: U x = y.
    let mut x = Array1::zeros(n);
    x[n - 1] = y[n - 1] / u[[n - 1, n - 1]];
    for i in (0..n - 1).rev() {
        let mut sum = T::zero();
        for j in i + 1..n {
            sum += u[[i, j]] * x[j];
        }
        x[i] = (y[i] - sum) / u[[i, i]];
    }

    Ok(x)
}

fn square_order<T>(m: &Array2<T>) -> Result<usize> {
    if m.ncols() != m.nrows() {
        return Err(SolveError::DimensionMismatch {
            expected: m.nrows(),
            got: m.ncols(),
        });
    }
    Ok(m.nrows())
}
