//! Error types
//!
//! The simulation itself has no failure modes; only configuration can be rejected.

use thiserror::Error;

/// Configuration could not be loaded
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config value `{0}` must be greater than zero")]
    Zero(&'static str),

    #[error("Config value `{0}` exceeds {max} ms", max = crate::consts::MAX_TIMER_MS)]
    TooLong(&'static str),
}
