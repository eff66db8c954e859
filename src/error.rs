//! Error types for configuration validation
//!
//! Provides unified error handling for the construction boundary. The layout
//! and interaction code assumes valid, non-negative geometry; anything
//! malformed is rejected here before it can reach the engine.

use thiserror::Error;

/// Errors that can occur while building a grid configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A spatial field (margin, cell size, border, separation) is negative
    #[error("negative {field}: {value}")]
    NegativeDimension { field: &'static str, value: f32 },

    /// The frequency row count is zero
    #[error("frequencies must be at least 1")]
    ZeroFrequencies,

    /// Drag damping outside the [0, 1] range
    #[error("drag sensibility out of range: {0} (expected 0.0..=1.0)")]
    SensibilityOutOfRange(f32),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
