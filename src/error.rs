//! Error types for session setup and configuration loading
//!
//! The tick path itself never fails: inputs are clamped instead.

/// Errors raised when building a session or loading configuration
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
