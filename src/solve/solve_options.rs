use nalgebra::DMatrix;

use crate::misc::FloatingPoint;

/// Options forwarded to the linear solve routine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveOptions<T: FloatingPoint> {
    /// Right-hand side `B` of `A * X = B`.
    /// When `None`, the identity matrix is used and the solve yields the inverse of `A`.
    pub rhs: Option<DMatrix<T>>,
    /// Threshold for the reciprocal condition number `1 / (|A|_1 * |A^-1|_1)`.
    /// Matrices whose value falls below it are treated as computationally singular.
    pub tolerance: T,
}

impl<T: FloatingPoint> Default for SolveOptions<T> {
    fn default() -> Self {
        Self {
            rhs: None,
            tolerance: T::default_epsilon(),
        }
    }
}

impl<T: FloatingPoint> SolveOptions<T> {
    pub fn with_rhs(mut self, rhs: DMatrix<T>) -> Self {
        self.rhs = Some(rhs);
        self
    }

    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }
}
