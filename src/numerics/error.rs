// src/numerics/error.rs
// Error types for the numerics module.

/// Errors raised by matrix operations that are not total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Singular matrix: {dimension}x{dimension} determinant is {determinant}")]
    Singular { dimension: usize, determinant: f64 },
}

/// Errors raised while building a `ConditioningConfig`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown parameter: {0}")]
    UnknownParameter(String),

    #[error("Malformed parameter '{0}': expected key=value")]
    MalformedParameter(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
