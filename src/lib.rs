//! # fixmat - fixed-size linear algebra primitives
//!
//! Stack-only 3- and 4-component vectors and 3x3 / 4x4 matrices, generic over
//! `f32` or `f64`. Every operation is a pure function returning a fresh value.
//!
//! ## Core Features
//!
//! - **Vectors**: `+`, `-`, scalar products on either side, `dot`, `cross` (3D)
//! - **Matrices**: matrix-vector and matrix-matrix products, `transpose`,
//!   `trace`, `determinant`, `inverse`, `condition_number`
//! - **Conditioning**: [`ConditioningConfig`] decides when results built on
//!   `inverse` can be trusted
//!
//! ## Quick Start
//!
//! ```rust
//! use fixmat::{Matrix3x3, Vector3, SquareMatrix, ConditioningConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let m = Matrix3x3::from_rows([4.0_f64, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]);
//! assert_eq!(m.determinant(), 9.0);
//!
//! let inv = m.inverse()?;
//! assert!((m * inv).approx_eq(&Matrix3x3::identity(), 1e-12));
//!
//! let x = Vector3::new(1.0, 0.0, 0.0);
//! let y = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
//!
//! let config = ConditioningConfig::default();
//! println!("well conditioned: {}", config.is_well_conditioned(&m));
//! println!("kappa: {}", m.condition_number()?);
//! # Ok(())
//! # }
//! ```

pub mod numerics;

// Re-export commonly used types for convenience
pub use numerics::conditioning::ConditioningConfig;
pub use numerics::error::{ConfigError, MatrixError};
pub use numerics::types::matrix::Matrix3x3;
pub use numerics::types::matrix4x4::Matrix4x4;
pub use numerics::types::traits::{FloatingPoint, SquareMatrix};
pub use numerics::types::vector::Vector3;
pub use numerics::types::vector4::Vector4;

/// Version information for the fixmat crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
