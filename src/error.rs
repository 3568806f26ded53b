//! Error types for world construction and configuration loading
//!
//! The physics path itself is infallible; these only surface before the
//! first tick.

/// Simulation setup errors
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid body state at slot {index}: {reason}")]
    InvalidBodyState { index: usize, reason: String },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SimResult<T> = Result<T, SimError>;
