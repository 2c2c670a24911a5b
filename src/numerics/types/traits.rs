// src/numerics/types/traits.rs
// Scalar bound shared by every vector and matrix type, plus the common
// surface of the square matrix types.

use core::fmt::Debug;

use crate::numerics::error::MatrixError;

/// FloatingPoint is a minimal trait for the floating point types
/// used as scalars by the numerics types.
///
/// Note: We require Copy, PartialOrd and the basic arithmetic ops on Self.
pub trait FloatingPoint:
Copy + PartialOrd + Debug
+ core::ops::Add<Output = Self>
+ core::ops::Sub<Output = Self>
+ core::ops::Mul<Output = Self>
+ core::ops::Div<Output = Self>
+ core::ops::Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn abs(self) -> Self;
    fn is_finite(self) -> bool;
    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl FloatingPoint for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f32::abs(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f64(value: f64) -> Self { value as f32 }
    fn to_f64(self) -> f64 { self as f64 }
}

impl FloatingPoint for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn abs(self) -> Self { f64::abs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f64(value: f64) -> Self { value }
    fn to_f64(self) -> f64 { self }
}

/// Operations shared by the fixed-size square matrix types.
///
/// Everything here is pure: methods take `&self` and return fresh values.
pub trait SquareMatrix: Copy + Sized {
    type Scalar: FloatingPoint;

    /// Number of rows (and columns).
    const DIM: usize;

    fn identity() -> Self;

    fn transpose(&self) -> Self;

    /// Sum of the diagonal entries.
    fn trace(&self) -> Self::Scalar;

    fn determinant(&self) -> Self::Scalar;

    /// Adjugate divided by the determinant.
    ///
    /// # Errors
    /// * `MatrixError::Singular` - the determinant is exactly zero or not finite
    fn inverse(&self) -> Result<Self, MatrixError>;

    /// Sum of squares of all entries (the squared Frobenius norm).
    fn l2_norm(&self) -> Self::Scalar;

    /// Componentwise comparison with an absolute tolerance.
    fn approx_eq(&self, other: &Self, tolerance: Self::Scalar) -> bool;

    /// `l2_norm(m) * l2_norm(inverse(m))`.
    ///
    /// Because `l2_norm` is squared, the smallest value this can take is
    /// `DIM²`, reached by scaled orthogonal matrices.
    fn condition_number(&self) -> Result<Self::Scalar, MatrixError> {
        let inverse = self.inverse()?;
        Ok(self.l2_norm() * inverse.l2_norm())
    }

    /// `condition_number` divided by its lower bound `DIM²`, so that 1.0 means
    /// "as well conditioned as a scaled rotation".
    fn normalized_condition_number(&self) -> Result<Self::Scalar, MatrixError> {
        let bound = Self::Scalar::from_f64((Self::DIM * Self::DIM) as f64);
        Ok(self.condition_number()? / bound)
    }
}
