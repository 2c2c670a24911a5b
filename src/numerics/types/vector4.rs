// src/numerics/types/vector4.rs
// Vector4 generic implementation, the 4-component sibling of Vector3.

use core::ops::{Add, Mul, Neg, Sub};
use serde::{Serialize, Deserialize};

use super::traits::FloatingPoint;

/// Four component vector. There is no cross product in four dimensions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vector4<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Serialize for Vector4<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z, &self.w).serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Vector4<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z, w) = <(T, T, T, T)>::deserialize(deserializer)?;
        Ok(Vector4 { x, y, z, w })
    }
}

impl<T: FloatingPoint> Vector4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one(), T::one())
    }

    pub fn scale(self, c: T) -> Self {
        Self::new(self.x * c, self.y * c, self.z * c, self.w * c)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn approx_eq(&self, other: &Self, tolerance: T) -> bool {
        (self.x - other.x).abs() < tolerance
            && (self.y - other.y).abs() < tolerance
            && (self.z - other.z).abs() < tolerance
            && (self.w - other.w).abs() < tolerance
    }
}

impl<T: FloatingPoint> Default for Vector4<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FloatingPoint> Add for Vector4<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z, self.w + other.w)
    }
}

impl<T: FloatingPoint> Sub for Vector4<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z, self.w - other.w)
    }
}

impl<T: FloatingPoint> Neg for Vector4<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

impl<T: FloatingPoint> Mul<T> for Vector4<T> {
    type Output = Self;

    fn mul(self, c: T) -> Self {
        self.scale(c)
    }
}

macro_rules! impl_vector4_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector4<$t>> for $t {
                type Output = Vector4<$t>;

                fn mul(self, v: Vector4<$t>) -> Vector4<$t> {
                    Vector4::new(self * v.x, self * v.y, self * v.z, self * v.w)
                }
            }

            impl Vector4<$t> {
                pub fn length(&self) -> $t {
                    self.length_squared().sqrt()
                }
            }
        )*
    };
}

impl_vector4_scalar_ops!(f32, f64);

impl<T: FloatingPoint> From<(T, T, T, T)> for Vector4<T> {
    fn from(tuple: (T, T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2, tuple.3)
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for (T, T, T, T) {
    fn from(v: Vector4<T>) -> Self {
        (v.x, v.y, v.z, v.w)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Vector4<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

impl<T: FloatingPoint> From<Vector4<T>> for [T; 4] {
    fn from(v: Vector4<T>) -> Self {
        [v.x, v.y, v.z, v.w]
    }
}

impl<T: FloatingPoint> From<&[T; 4]> for Vector4<T> {
    fn from(array: &[T; 4]) -> Self {
        Self::new(array[0], array[1], array[2], array[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_neg() {
        let a = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        let b = Vector4::new(0.5_f32, 0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector4::new(1.5, 2.5, 3.5, 4.5));
        assert_eq!(a - b, Vector4::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a + (-a), Vector4::zero());
    }

    #[test]
    fn test_scale_and_dot() {
        let v = Vector4::new(1.0_f64, 2.0, 3.0, 4.0);
        assert_eq!(3.0 * v, v * 3.0);
        assert_eq!(v.dot(&Vector4::one()), 10.0);
        assert_eq!(v.length_squared(), 30.0);
        assert!((v.length() - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_array_and_tuple_conversions() {
        let v: Vector4<f32> = [1.0, 2.0, 3.0, 4.0].into();
        let t: (f32, f32, f32, f32) = v.into();
        assert_eq!(t, (1.0, 2.0, 3.0, 4.0));
        assert_eq!(Vector4::from(t), v);
        let arr: [f32; 4] = v.into();
        assert_eq!(Vector4::from(&arr), v);
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let v = Vector4::new(1.0_f64, -2.0, 3.5, 0.0);
        let encoded = bincode::serde::encode_to_vec(&v, config).unwrap();
        let (decoded, _): (Vector4<f64>, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();
        assert_eq!(v, decoded);
    }
}
