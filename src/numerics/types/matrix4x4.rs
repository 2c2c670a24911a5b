// src/numerics/types/matrix4x4.rs
// Matrix4x4 generic implementation. Row-major storage, data[row][col].
// Determinant and inverse are built from genuine 3x3 minors.

use core::ops::{Add, Index, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

use crate::numerics::error::MatrixError;
use crate::numerics::types::matrix::{cofactor_sign, Matrix3x3};
use crate::numerics::types::traits::{FloatingPoint, SquareMatrix};
use crate::numerics::types::vector4::Vector4;

/// 4x4 matrix over a floating point scalar.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Matrix4x4<T: FloatingPoint = f32> {
    pub data: [[T; 4]; 4],
}

/// Indices of the three rows (or columns) left after deleting `skip`.
fn remaining(skip: usize) -> [usize; 3] {
    match skip {
        0 => [1, 2, 3],
        1 => [0, 2, 3],
        2 => [0, 1, 3],
        3 => [0, 1, 2],
        _ => panic!("index {skip} out of range for a 4x4 matrix"),
    }
}

impl<T: FloatingPoint> Matrix4x4<T> {
    /// Construct from a row-major array: `data[row][col]`.
    pub fn new(data: [[T; 4]; 4]) -> Self {
        Self { data }
    }

    pub fn from_rows(r0: [T; 4], r1: [T; 4], r2: [T; 4], r3: [T; 4]) -> Self {
        Self { data: [r0, r1, r2, r3] }
    }

    pub fn from_columns(c0: [T; 4], c1: [T; 4], c2: [T; 4], c3: [T; 4]) -> Self {
        Self { data: [c0, c1, c2, c3] }.transpose()
    }

    pub fn from_diagonal(diagonal: [T; 4]) -> Self {
        let mut m = Self::zero();
        for i in 0..4 {
            m.data[i][i] = diagonal[i];
        }
        m
    }

    pub fn row(&self, idx: usize) -> [T; 4] {
        self.data[idx]
    }

    pub fn column(&self, idx: usize) -> [T; 4] {
        [self.data[0][idx], self.data[1][idx], self.data[2][idx], self.data[3][idx]]
    }

    pub fn zero() -> Self {
        Self { data: [[T::zero(); 4]; 4] }
    }

    pub fn one() -> Self {
        Self { data: [[T::one(); 4]; 4] }
    }

    pub fn identity() -> Self {
        Self::from_diagonal([T::one(); 4])
    }

    pub fn scale(self, c: T) -> Self {
        Self { data: self.data.map(|row| row.map(|x| x * c)) }
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                t.data[i][j] = self.data[j][i];
            }
        }
        t
    }

    pub fn trace(&self) -> T {
        self.data[0][0] + self.data[1][1] + self.data[2][2] + self.data[3][3]
    }

    /// The 3x3 matrix left after deleting `row` and `col`, order preserved.
    pub fn submatrix(&self, row: usize, col: usize) -> Matrix3x3<T> {
        let rows = remaining(row);
        let cols = remaining(col);
        Matrix3x3::new(rows.map(|r| cols.map(|c| self.data[r][c])))
    }

    pub fn minor(&self, row: usize, col: usize) -> T {
        self.submatrix(row, col).determinant()
    }

    pub fn cofactor(&self, row: usize, col: usize) -> T {
        cofactor_sign::<T>(row, col) * self.minor(row, col)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        let mut adj = Self::zero();
        for r in 0..4 {
            for c in 0..4 {
                adj.data[c][r] = self.cofactor(r, c);
            }
        }
        adj
    }

    /// Laplace expansion along the first row.
    pub fn determinant(&self) -> T {
        (0..4).fold(T::zero(), |acc, j| acc + self.data[0][j] * self.cofactor(0, j))
    }

    /// Adjugate scaled by `1 / det`.
    ///
    /// # Returns
    /// * `Ok(Matrix4x4)` - the inverse; unreliable when the matrix is badly conditioned
    /// * `Err(MatrixError::Singular)` - the determinant is exactly zero or not finite
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        let det = self.determinant();
        if det == T::zero() || !det.is_finite() {
            tracing::debug!(dimension = 4, determinant = det.to_f64(), "matrix is singular");
            return Err(MatrixError::Singular { dimension: 4, determinant: det.to_f64() });
        }
        Ok(self.adjugate().scale(T::one() / det))
    }

    /// Sum of squares of all sixteen entries. This is the squared Frobenius
    /// norm; it only feeds `condition_number`.
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

impl<T: FloatingPoint> SquareMatrix for Matrix4x4<T> {
    type Scalar = T;
    const DIM: usize = 4;

    fn identity() -> Self { Matrix4x4::identity() }
    fn transpose(&self) -> Self { Matrix4x4::transpose(self) }
    fn trace(&self) -> T { Matrix4x4::trace(self) }
    fn determinant(&self) -> T { Matrix4x4::determinant(self) }
    fn inverse(&self) -> Result<Self, MatrixError> { Matrix4x4::inverse(self) }
    fn l2_norm(&self) -> T { Matrix4x4::l2_norm(self) }
    fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        Matrix4x4::approx_eq(self, other, tolerance)
    }
}

impl<T: FloatingPoint> Default for Matrix4x4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Index<(usize, usize)> for Matrix4x4<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T> Serialize for Matrix4x4<T>
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

impl<'de, T> Deserialize<'de> for Matrix4x4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let arr = <[[T; 4]; 4]>::deserialize(deserializer)?;
        Ok(Matrix4x4 { data: arr })
    }
}

impl<T: FloatingPoint> Add for Matrix4x4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] + other.data[i][j];
            }
        }
        Matrix4x4 { data: result }
    }
}

impl<T: FloatingPoint> Sub for Matrix4x4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut result = self.data;
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = self.data[i][j] - other.data[i][j];
            }
        }
        Matrix4x4 { data: result }
    }
}

impl<T: FloatingPoint> Neg for Matrix4x4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Matrix4x4 { data: self.data.map(|row| row.map(|x| -x)) }
    }
}

impl<T: FloatingPoint> Mul<T> for Matrix4x4<T> {
    type Output = Self;

    fn mul(self, scalar: T) -> Self {
        self.scale(scalar)
    }
}

macro_rules! impl_matrix4x4_scalar_lhs {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix4x4<$t>> for $t {
                type Output = Matrix4x4<$t>;

                fn mul(self, m: Matrix4x4<$t>) -> Matrix4x4<$t> {
                    Matrix4x4 { data: m.data.map(|row| row.map(|x| self * x)) }
                }
            }
        )*
    };
}

impl_matrix4x4_scalar_lhs!(f32, f64);

impl<T: FloatingPoint> Mul<Vector4<T>> for Matrix4x4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Vector4<T>) -> Vector4<T> {
        let v = [rhs.x, rhs.y, rhs.z, rhs.w];
        let [x, y, z, w] = self.data.map(|row| {
            row[0] * v[0] + row[1] * v[1] + row[2] * v[2] + row[3] * v[3]
        });
        Vector4 { x, y, z, w }
    }
}

/// Row vector times matrix.
impl<T: FloatingPoint> Mul<Matrix4x4<T>> for Vector4<T> {
    type Output = Vector4<T>;

    fn mul(self, rhs: Matrix4x4<T>) -> Vector4<T> {
        rhs.transpose() * self
    }
}

impl<T: FloatingPoint> Mul<Matrix4x4<T>> for Matrix4x4<T> {
    type Output = Matrix4x4<T>;

    fn mul(self, rhs: Matrix4x4<T>) -> Matrix4x4<T> {
        let mut result = [[T::zero(); 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                result[i][j] = (0..4)
                    .fold(T::zero(), |acc, k| acc + self.data[i][k] * rhs.data[k][j]);
            }
        }
        Matrix4x4 { data: result }
    }
}
