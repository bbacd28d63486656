use nalgebra::RealField;
use num_traits::ToPrimitive;

/// Scalar type of the matrices held by a cache cell (f32, f64)
/// `ToPrimitive` lets error values report tolerances as `f64` regardless of the scalar
pub trait FloatingPoint: RealField + ToPrimitive + Copy {}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
