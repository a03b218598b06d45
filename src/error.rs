//! Configuration error types.

use thiserror::Error;

use crate::models::SlotType;

/// Errors raised while building or loading roster configuration.
///
/// The allocator and statistics never fail; only configuration
/// construction can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("capacity for {0} must be at least 1")]
    ZeroCapacity(SlotType),

    #[error("base pay rate must be finite and non-negative, got {0}")]
    InvalidBaseRate(f64),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
