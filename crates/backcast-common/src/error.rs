//! Error types for Backcast
//!
//! Provides a unified error type and domain-specific error variants

use thiserror::Error;

/// Result type alias using BackcastError
pub type Result<T> = std::result::Result<T, BackcastError>;

/// Unified error type for Backcast operations
#[derive(Debug, Error)]
pub enum BackcastError {
    // Input validation errors
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Scenario input validation errors
///
/// Every variant maps to a value that would produce NaN, negative, or
/// otherwise meaningless costs if it reached the estimator loop. These are
/// rejected before any year is computed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{field} must be a finite, non-negative number, got {value}")]
    NegativeScale { field: &'static str, value: f64 },

    #[error("Planning horizon must be at least one year")]
    ZeroHorizon,

    #[error("Client growth rate must be a finite number greater than -1, got {rate}")]
    GrowthRateOutOfRange { rate: f64 },

    #[error("Tier schedule invalid: {0}")]
    TierSchedule(String),
}

// Implement From for common external error types
impl From<serde_json::Error> for BackcastError {
    fn from(err: serde_json::Error) -> Self {
        BackcastError::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for BackcastError {
    fn from(err: std::io::Error) -> Self {
        BackcastError::Config(err.to_string())
    }
}

impl From<anyhow::Error> for BackcastError {
    fn from(err: anyhow::Error) -> Self {
        BackcastError::Internal(err.to_string())
    }
}
