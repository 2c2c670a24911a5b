// src/numerics/types/matrix.rs
// Matrix3x3 generic implementation. Row-major storage, data[row][col].

use core::ops::{Add, Index, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

use crate::numerics::error::MatrixError;
use crate::numerics::types::traits::{FloatingPoint, SquareMatrix};
use crate::numerics::types::vector::Vector3;

/// 3x3 matrix over a floating point scalar.
///
/// A Matrix3x3 may be singular; only `inverse` (and the conditioning
/// helpers built on it) care.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix3x3<T: FloatingPoint = f32> {
    pub data: [[T; 3]; 3],
}

/// Indices of the two rows (or columns) left after deleting `skip`.
fn remaining(skip: usize) -> [usize; 2] {
    match skip {
        0 => [1, 2],
        1 => [0, 2],
        2 => [0, 1],
        _ => panic!("index {skip} out of range for a 3x3 matrix"),
    }
}

/// `(-1)^(row+col)`, shared with the 4x4 cofactors.
pub(crate) fn cofactor_sign<T: FloatingPoint>(row: usize, col: usize) -> T {
    if (row + col) % 2 == 0 { T::one() } else { -T::one() }
}

impl<T: FloatingPoint> Matrix3x3<T> {
    /// Construct from a row-major array: `data[row][col]`.
    pub fn new(data: [[T; 3]; 3]) -> Self {
        Self { data }
    }

    /// Construct a new matrix from 3 rows
    pub fn from_rows(r0: [T; 3], r1: [T; 3], r2: [T; 3]) -> Self {
        Self { data: [r0, r1, r2] }
    }

    /// Construct a new matrix from 3 columns
    pub fn from_columns(c0: [T; 3], c1: [T; 3], c2: [T; 3]) -> Self {
        Self {
            data: [
                [c0[0], c1[0], c2[0]],
                [c0[1], c1[1], c2[1]],
                [c0[2], c1[2], c2[2]],
            ],
        }
    }

    /// Diagonal matrix with `diagonal` on the main diagonal.
    pub fn from_diagonal(diagonal: [T; 3]) -> Self {
        let mut m = Self::zero();
        for i in 0..3 {
            m.data[i][i] = diagonal[i];
        }
        m
    }

    /// Get a row by index
    pub fn row(&self, idx: usize) -> [T; 3] {
        self.data[idx]
    }

    /// Get a column by index
    pub fn column(&self, idx: usize) -> [T; 3] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx]]
    }

    /// Zero matrix
    pub fn zero() -> Self {
        Self { data: [[T::zero(); 3]; 3] }
    }

    /// One matrix (all elements = 1)
    pub fn one() -> Self {
        Self { data: [[T::one(); 3]; 3] }
    }

    /// Identity matrix
    pub fn identity() -> Self {
        Self::from_diagonal([T::one(); 3])
    }

    /// Multiply every entry by `c`.
    pub fn scale(self, c: T) -> Self {
        Self { data: self.data.map(|row| row.map(|x| x * c)) }
    }

    pub fn transpose(&self) -> Self {
        Self::from_columns(self.data[0], self.data[1], self.data[2])
    }

    pub fn trace(&self) -> T {
        self.data[0][0] + self.data[1][1] + self.data[2][2]
    }

    /// Determinant of the 2x2 matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> T {
        let [r0, r1] = remaining(row);
        let [c0, c1] = remaining(col);
        let d = &self.data;
        d[r0][c0] * d[r1][c1] - d[r0][c1] * d[r1][c0]
    }

    /// Signed minor, `(-1)^(row+col) * minor(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> T {
        cofactor_sign::<T>(row, col) * self.minor(row, col)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::zero();
        for r in 0..3 {
            for c in 0..3 {
                adj.data[c][r] = self.cofactor(r, c);
            }
        }
        adj
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..3).fold(T::zero(), |acc, j| acc + self.data[0][j] * self.cofactor(0, j))
    }

    /// Adjugate scaled by `1 / det`.
    ///
    /// # Returns
    /// * `Ok(Matrix3x3)` - the inverse; unreliable when the matrix is badly conditioned
    /// * `Err(MatrixError::Singular)` - the determinant is exactly zero or not finite
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det == T::zero() || !det.is_finite() {
            tracing::debug!(dimension = 3, determinant = det.to_f64(), "matrix is singular");
            return Err(MatrixError::Singular { dimension: 3, determinant: det.to_f64() });
        }
        Ok(self.adjugate().scale(T::one() / det))
    }

    /// Sum of squares of all nine entries.
    pub fn l2_norm(&self) -> T {
        self.data
            .iter()
            .flatten()
            .fold(T::zero(), |acc, &x| acc + x * x)
    }

    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(&a, &b)| (a - b).abs() < tolerance)
    }
}

impl<T: FloatingPoint> SquareMatrix for Matrix3x3<T> {
    type Scalar = T;
    const DIM: usize = 3;

    fn identity() -> Self { Matrix3x3::identity() }
    fn transpose(&self) -> Self { Matrix3x3::transpose(self) }
    fn trace(&self) -> T { Matrix3x3::trace(self) }
    fn determinant(&self) -> T { Matrix3x3::determinant(self) }
    fn inverse(&self) -> Result<Self, MatrixError> { Matrix3x3::inverse(self) }
    fn l2_norm(&self) -> T { Matrix3x3::l2_norm(self) }
    fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        Matrix3x3::approx_eq(self, other, tolerance)
    }
}

impl<T: FloatingPoint> Default for Matrix3x3<T> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Zero-based `(row, col)` access.
impl<T: FloatingPoint> Index<(usize, usize)> for Matrix3x3<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

// Generic serde implementations for Matrix3x3
impl<T> Serialize for Matrix3x3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.data.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Matrix3x3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr = <[[T; 3]; 3]>::deserialize(deserializer)?;
        Ok(Matrix3x3 { data: arr })
    }
}

impl<T: FloatingPoint> Add for Matrix3x3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl<T: FloatingPoint> Sub for Matrix3x3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix3x3 { data: result }
    }
}

impl<T: FloatingPoint> Neg for Matrix3x3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Matrix3x3 { data: self.data.map(|row| row.map(|x| -x)) }
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix3x3<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(scalar)
    }
}

macro_rules! impl_matrix3x3_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix3x3<$t>> for $t {
                type Output = Matrix3x3<$t>;

                fn mul(self, m: Matrix3x3<$t>) -> Matrix3x3<$t> {
                    Matrix3x3 { data: m.data.map(|row| row.map(|x| self * x)) }
                }
            }
        )*
    };
}

impl_matrix3x3_scalar_lhs!(f32, f64);

impl<T: FloatingPoint> Mul<Vector3<T>> for Matrix3x3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Vector3<T>) -> Vector3<T> {
        Vector3 {
            x: self.data[0][0] * rhs.x + self.data[0][1] * rhs.y + self.data[0][2] * rhs.z,
            y: self.data[1][0] * rhs.x + self.data[1][1] * rhs.y + self.data[1][2] * rhs.z,
            z: self.data[2][0] * rhs.x + self.data[2][1] * rhs.y + self.data[2][2] * rhs.z,
        }
    }
}

/// Row vector times matrix.
impl<T: FloatingPoint> Mul<Matrix3x3<T>> for Vector3<T> {
    type Output = Vector3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Vector3<T> {
        Vector3 {
            x: self.x * rhs.data[0][0] + self.y * rhs.data[1][0] + self.z * rhs.data[2][0],
            y: self.x * rhs.data[0][1] + self.y * rhs.data[1][1] + self.z * rhs.data[2][1],
            z: self.x * rhs.data[0][2] + self.y * rhs.data[1][2] + self.z * rhs.data[2][2],
        }
    }
}

impl<T: FloatingPoint> Mul<Matrix3x3<T>> for Matrix3x3<T> {
    type Output = Matrix3x3<T>;

    fn mul(self, rhs: Matrix3x3<T>) -> Matrix3x3<T> {
        let mut result = [[T::zero(); 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                result[i][j] =
                    self.data[i][0] * rhs.data[0][j] +
                        self.data[i][1] * rhs.data[1][j] +
                        self.data[i][2] * rhs.data[2][j];
            }
        }
        Matrix3x3 { data: result }
    }
}
