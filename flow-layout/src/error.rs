//! Error types for configuration loading.
//!
//! Placement and the controller never fail; only reading a [`crate::FlowConfig`]
//! can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid spacing: {0} (must be finite and non-negative)")]
    InvalidSpacing(f32),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FlowError>;
