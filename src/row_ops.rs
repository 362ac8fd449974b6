//! Shared row-level primitives for the elimination solvers.
//!
//! Both eliminators are built from the same moves: pick a pivot row, swap it
//! into place, and apply scaled row updates across a column range. The
//! helpers here keep those moves (and their operation counting) in one place.

use crate::counter::OpCount;
use crate::error::{Result, SolveError};
use ndarray::Array2;
use num_traits::{Float, NumAssign};

/// Find the pivot row for `column`, scanning rows `start_row..n`.
///
/// Only entries with `|value| >= tolerance` are candidates; among those, the
/// row with the largest absolute value wins (partial pivoting), and the first
/// row encountered with the maximum magnitude wins ties.
///
/// Fails with [`SolveError::SingularSystem`] when every entry in the scanned
/// range is below `tolerance`.
pub fn select_pivot<T: Float>(
    matrix: &Array2<T>,
    column: usize,
    start_row: usize,
    tolerance: T,
) -> Result<usize> {
    let mut best: Option<usize> = None;
    let mut best_magnitude = T::zero();

    for row in start_row..matrix.nrows() {
        let magnitude = matrix[[row, column]].abs();
        if magnitude < tolerance {
            continue;
        }
        if best.is_none() || magnitude > best_magnitude {
            best = Some(row);
            best_magnitude = magnitude;
        }
    }

    best.ok_or(SolveError::SingularSystem)
}

/// Swap rows `a` and `b` across every column.
#[inline]
pub(crate) fn swap_rows<T>(matrix: &mut Array2<T>, a: usize, b: usize) {
    for k in 0..matrix.ncols() {
        matrix.swap([a, k], [b, k]);
    }
}

/// Subtract `factor` times row `source` from row `target` over columns
/// `start_col..`, counting one multiply and one subtract per cell.
#[inline]
pub(crate) fn subtract_scaled<T: Float + NumAssign>(
    matrix: &mut Array2<T>,
    target: usize,
    source: usize,
    factor: T,
    start_col: usize,
    counts: &mut OpCount,
) {
    for k in start_col..matrix.ncols() {
        let s = matrix[[source, k]];
        matrix[[target, k]] -= factor * s;
        counts.muldiv += 1;
        counts.addsub += 1;
    }
}

/// Divide row `row` by `pivot` over columns `start_col..`, counting one
/// divide per cell. The pivot cell itself becomes exactly 1.
#[inline]
pub(crate) fn normalize_row<T: Float + NumAssign>(
    matrix: &mut Array2<T>,
    row: usize,
    pivot: T,
    start_col: usize,
    counts: &mut OpCount,
) {
    for k in start_col..matrix.ncols() {
        matrix[[row, k]] /= pivot;
        counts.muldiv += 1;
    }
}
