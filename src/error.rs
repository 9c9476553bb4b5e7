//! Error types for ramp-slide.

use thiserror::Error;

/// Rejected simulation input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("mass must be positive and finite, got {0}")]
    InvalidMass(f32),

    #[error("{name} must be finite, got {value}")]
    InvalidParameter { name: &'static str, value: f32 },
}

/// Failure loading or saving a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = std::result::Result<T, SimError>;
