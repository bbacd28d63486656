use std::cmp::Ordering;

use nalgebra::DMatrix;

use crate::{
    error::{InverseError, InverseResult},
    misc::FloatingPoint,
};

use super::SolveOptions;

/// Check that the matrix is a non-empty square matrix with finite entries.
/// Returns the dimension `n` of the `n x n` matrix.
pub fn validate_square<T: FloatingPoint>(matrix: &DMatrix<T>) -> InverseResult<usize> {
    let (rows, cols) = matrix.shape();
    if rows == 0 || cols == 0 {
        return Err(InverseError::InvalidInput(format!(
            "matrix is empty ({}x{})",
            rows, cols
        )));
    }
    if rows != cols {
        return Err(InverseError::InvalidInput(format!(
            "expected a square matrix, got {}x{}",
            rows, cols
        )));
    }
    ensure_finite(matrix, "matrix")?;
    Ok(rows)
}

fn ensure_finite<T: FloatingPoint>(matrix: &DMatrix<T>, label: &str) -> InverseResult<()> {
    // storage is column-major
    match matrix.iter().position(|v| !v.is_finite()) {
        Some(k) => {
            let rows = matrix.nrows();
            Err(InverseError::InvalidInput(format!(
                "{} has a non-finite entry at ({}, {})",
                label,
                k % rows,
                k / rows
            )))
        }
        None => Ok(()),
    }
}

/// Maximum absolute column sum
fn one_norm<T: FloatingPoint>(matrix: &DMatrix<T>) -> T {
    matrix.column_iter().fold(T::zero(), |norm, column| {
        let sum = column.iter().fold(T::zero(), |acc, v| acc + v.abs());
        norm.max(sum)
    })
}

/// Reciprocal condition number `1 / (|A|_1 * |A^-1|_1)` in the 1-norm.
/// Returns zero when the product overflows or vanishes.
fn reciprocal_condition<T: FloatingPoint>(matrix: &DMatrix<T>, inverse: &DMatrix<T>) -> T {
    let product = one_norm(matrix) * one_norm(inverse);
    if !product.is_finite() || product <= T::zero() {
        return T::zero();
    }
    T::one() / product
}

fn singular<T: FloatingPoint>(reciprocal_condition: T, tolerance: T) -> InverseError {
    InverseError::SingularMatrix {
        reciprocal_condition: reciprocal_condition.to_f64().unwrap_or(f64::NAN),
        tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
    }
}

/// Solve `A * X = B` for `X` with a partial pivoting LU decomposition.
/// `B` defaults to the identity, in which case `X` is the inverse of `A`.
/// Fails with [`InverseError::SingularMatrix`] when the 1-norm reciprocal condition number of `A`
/// falls below `options.tolerance`.
/// # Example
/// ```
/// use inverse_cache::prelude::*;
/// use nalgebra::DMatrix;
/// let a = DMatrix::from_row_slice(2, 2, &[2., 0., 0., 4.]);
/// let b = DMatrix::from_row_slice(2, 1, &[2., 2.]);
/// let x = solve(&a, &SolveOptions::default().with_rhs(b)).unwrap();
/// assert_eq!(x, DMatrix::from_row_slice(2, 1, &[1., 0.5]));
/// ```
pub fn solve<T: FloatingPoint>(
    matrix: &DMatrix<T>,
    options: &SolveOptions<T>,
) -> InverseResult<DMatrix<T>> {
    let n = validate_square(matrix)?;

    let rhs = options.rhs.as_ref();
    if let Some(rhs) = rhs {
        if rhs.nrows() != n {
            return Err(InverseError::DimensionMismatch {
                expected: n,
                actual: rhs.nrows(),
            });
        }
        ensure_finite(rhs, "right-hand side")?;
    }

    let lu = matrix.clone().lu();
    let tolerance = options.tolerance;

    // an exact zero pivot leaves no inverse to measure
    let inverse = lu
        .try_inverse()
        .ok_or_else(|| singular(T::zero(), tolerance))?;

    let rcond = reciprocal_condition(matrix, &inverse);
    // NaN estimates compare as None and are rejected too
    if !matches!(
        rcond.partial_cmp(&tolerance),
        Some(Ordering::Greater | Ordering::Equal)
    ) {
        #[cfg(feature = "log")]
        log::debug!(
            "rejecting {}x{} matrix as singular (rcond = {:?}, tolerance = {:?})",
            n,
            n,
            rcond,
            tolerance
        );
        return Err(singular(rcond, tolerance));
    }

    match rhs {
        None => Ok(inverse),
        Some(rhs) => lu.solve(rhs).ok_or_else(|| singular(rcond, tolerance)),
    }
}

/// Compute the inverse of a square matrix.
pub fn invert<T: FloatingPoint>(matrix: &DMatrix<T>) -> InverseResult<DMatrix<T>> {
    solve(matrix, &SolveOptions::default())
}
