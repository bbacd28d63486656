use thiserror::Error;

/// Errors raised while solving or inverting the matrix held in a cache cell.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InverseError {
    /// The stored value is not a well-formed square numeric matrix.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The matrix is square but not invertible within the given tolerance.
    #[error(
        "singular matrix: reciprocal condition number {reciprocal_condition:e} is below tolerance {tolerance:e}"
    )]
    SingularMatrix {
        /// Estimated reciprocal condition number of the LU factor
        reciprocal_condition: f64,
        /// Threshold the estimate was compared against
        tolerance: f64,
    },

    /// The right-hand side does not have as many rows as the matrix.
    #[error("dimension mismatch: right-hand side has {actual} rows, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl InverseError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, InverseError::InvalidInput(_))
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, InverseError::SingularMatrix { .. })
    }
}

/// Result type for inversion and solve operations.
pub type InverseResult<T> = std::result::Result<T, InverseError>;
