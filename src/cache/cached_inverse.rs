use nalgebra::DMatrix;

use crate::{
    error::InverseResult,
    misc::FloatingPoint,
    solve::{solve, SolveOptions},
};

use super::{CacheCell, CacheStatus};

/// Return the inverse of the matrix held in the cell, solving it only when nothing is cached.
/// # Example
/// ```
/// use inverse_cache::prelude::*;
/// use nalgebra::DMatrix;
/// let mut cell = CacheCell::new(DMatrix::from_row_slice(2, 2, &[2., 0., 0., 4.]));
/// let inv = cached_inverse(&mut cell).unwrap();
/// assert_eq!(inv, DMatrix::from_row_slice(2, 2, &[0.5, 0., 0., 0.25]));
/// ```
pub fn cached_inverse<T: FloatingPoint>(cell: &mut CacheCell<T>) -> InverseResult<DMatrix<T>> {
    cached_inverse_with(cell, &SolveOptions::default())
}

/// Same as [`cached_inverse`], forwarding `options` to the solve routine on a cache miss.
/// On a hit the options are ignored and the cached value is returned as-is.
pub fn cached_inverse_with<T: FloatingPoint>(
    cell: &mut CacheCell<T>,
    options: &SolveOptions<T>,
) -> InverseResult<DMatrix<T>> {
    cached_inverse_traced(cell, options).map(|(inverse, _)| inverse)
}

/// Same as [`cached_inverse_with`], also reporting whether the result came from the cache.
pub fn cached_inverse_traced<T: FloatingPoint>(
    cell: &mut CacheCell<T>,
    options: &SolveOptions<T>,
) -> InverseResult<(DMatrix<T>, CacheStatus)> {
    if let Some(inverse) = cell.cached_inverse() {
        #[cfg(feature = "log")]
        log::debug!(
            "returning cached inverse ({}x{})",
            inverse.nrows(),
            inverse.ncols()
        );
        return Ok((inverse.clone(), CacheStatus::Hit));
    }

    #[cfg(feature = "log")]
    log::trace!("no cached inverse, solving {:?} matrix", cell.dimension());

    // the cell is only written after a successful solve
    let inverse = solve(cell.matrix(), options)?;
    cell.set_cached_inverse(inverse.clone());
    Ok((inverse, CacheStatus::Miss))
}
