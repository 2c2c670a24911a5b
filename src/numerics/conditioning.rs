// src/numerics/conditioning.rs
// Gate for results that depend on `inverse`.

use serde::{Deserialize, Serialize};

use crate::numerics::error::{ConfigError, MatrixError};
use crate::numerics::types::traits::{FloatingPoint, SquareMatrix};

/// Configuration deciding when a matrix is treated as well conditioned.
///
/// `threshold` is compared against the *normalized* condition number, the
/// raw `condition_number` divided by `DIM²`. A value of 1.0 means the matrix
/// is a scaled rotation; larger values mean it is farther from one.
/// `tolerance` is the componentwise slack allowed when checking that
/// `m * inverse(m)` is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditioningConfig {
    pub threshold: f64,
    pub tolerance: f64,
}

impl Default for ConditioningConfig {
    /// Threshold 1.1 and tolerance 0.01.
    fn default() -> Self {
        Self {
            threshold: 1.1,
            tolerance: 1e-2,
        }
    }
}

impl ConditioningConfig {
    pub fn new(threshold: f64, tolerance: f64) -> Self {
        Self { threshold, tolerance }
    }

    /// Only accept matrices that are essentially scaled rotations.
    pub fn strict() -> Self {
        Self {
            threshold: 1.0 + 1e-6,
            tolerance: 1e-6,
        }
    }

    /// Accept moderately skewed matrices, checked with a looser tolerance.
    pub fn relaxed() -> Self {
        Self {
            threshold: 100.0,
            tolerance: 1e-1,
        }
    }

    /// Parse a comma separated `key=value` list, e.g. `"threshold=2.0,tolerance=1e-4"`.
    ///
    /// Keys not present keep their default value.
    pub fn from_parameters(parameters: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for param in parameters.split(',').map(|p| p.trim()).filter(|p| !p.is_empty()) {
            let (key, value) = param
                .split_once('=')
                .ok_or_else(|| ConfigError::MalformedParameter(param.to_string()))?;
            let (key, value) = (key.trim(), value.trim());

            let slot = match key {
                "threshold" => &mut config.threshold,
                "tolerance" => &mut config.tolerance,
                _ => return Err(ConfigError::UnknownParameter(key.to_string())),
            };

            let invalid = || ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
            };
            let parsed: f64 = value.parse().map_err(|_| invalid())?;
            if !parsed.is_finite() || parsed <= 0.0 {
                return Err(invalid());
            }
            *slot = parsed;
        }

        Ok(config)
    }

    /// True when `m` is invertible and its normalized condition number does
    /// not exceed `threshold`.
    pub fn is_well_conditioned<M: SquareMatrix>(&self, m: &M) -> bool {
        match m.normalized_condition_number() {
            Ok(kappa) => {
                let kappa = kappa.to_f64();
                tracing::trace!(kappa, threshold = self.threshold, "normalized condition number");
                kappa.is_finite() && kappa <= self.threshold
            }
            Err(_) => false,
        }
    }

    /// Check `m * inverse(m) ≈ identity` within `tolerance`.
    ///
    /// # Returns
    /// * `Ok(true)` - the product is the identity, or `m` is not well conditioned
    ///   and the check does not apply
    /// * `Ok(false)` - `m` is well conditioned but the product is off
    pub fn check_inverse_round_trip<M>(&self, m: &M) -> Result<bool, MatrixError>
    where
        M: SquareMatrix + core::ops::Mul<Output = M>,
    {
        if !self.is_well_conditioned(m) {
            return Ok(true);
        }
        let product = *m * m.inverse()?;
        Ok(product.approx_eq(&M::identity(), M::Scalar::from_f64(self.tolerance)))
    }
}
