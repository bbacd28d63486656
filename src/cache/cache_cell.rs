use nalgebra::DMatrix;

use crate::misc::FloatingPoint;

/// A mutable matrix paired with a lazily computed inverse.
///
/// Replacing the matrix through [`CacheCell::set_matrix`] always drops the cached inverse,
/// so a cached value never outlives the matrix that produced it.
/// The matrix itself is stored unvalidated; malformed content is only reported when the inverse is requested.
/// # Example
/// ```
/// use inverse_cache::prelude::*;
/// use nalgebra::DMatrix;
/// let mut cell = create_cache(Some(DMatrix::from_row_slice(2, 2, &[4., 3., 3., 2.])));
/// assert!(cell.cached_inverse().is_none());
/// let inv = cached_inverse(&mut cell).unwrap();
/// assert_eq!(cell.cached_inverse(), Some(&inv));
/// cell.set_matrix(DMatrix::identity(3, 3));
/// assert!(cell.cached_inverse().is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheCell<T: FloatingPoint> {
    matrix: DMatrix<T>,
    // never restored from serialized data, it is recomputed on the next request
    #[cfg_attr(feature = "serde", serde(skip))]
    inverse: Option<DMatrix<T>>,
}

impl<T: FloatingPoint> Default for CacheCell<T> {
    /// An empty `0x0` placeholder matrix with no cached inverse.
    fn default() -> Self {
        Self::new(DMatrix::zeros(0, 0))
    }
}

impl<T: FloatingPoint> From<DMatrix<T>> for CacheCell<T> {
    fn from(matrix: DMatrix<T>) -> Self {
        Self::new(matrix)
    }
}

impl<T: FloatingPoint> CacheCell<T> {
    pub fn new(matrix: DMatrix<T>) -> Self {
        Self {
            matrix,
            inverse: None,
        }
    }

    /// The matrix as it was last set.
    pub fn matrix(&self) -> &DMatrix<T> {
        &self.matrix
    }

    /// Replace the matrix and invalidate the cached inverse.
    pub fn set_matrix(&mut self, matrix: DMatrix<T>) {
        self.matrix = matrix;
        self.inverse = None;
    }

    /// The cached inverse, or `None` if it has not been computed since the last `set_matrix`.
    pub fn cached_inverse(&self) -> Option<&DMatrix<T>> {
        self.inverse.as_ref()
    }

    /// Overwrite the cached inverse.
    /// The value is not checked against the current matrix,
    /// so it must be the inverse of the matrix held right now.
    pub fn set_cached_inverse(&mut self, inverse: DMatrix<T>) {
        self.inverse = Some(inverse);
    }

    pub fn has_cached_inverse(&self) -> bool {
        self.inverse.is_some()
    }

    /// Shape of the stored matrix as `(rows, columns)`
    pub fn dimension(&self) -> (usize, usize) {
        self.matrix.shape()
    }
}

/// Create a cache cell, falling back to the empty placeholder matrix when none is given.
pub fn create_cache<T: FloatingPoint>(initial: Option<DMatrix<T>>) -> CacheCell<T> {
    initial.map(CacheCell::new).unwrap_or_default()
}
