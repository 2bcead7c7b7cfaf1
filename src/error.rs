//! Error types for axonsim

use thiserror::Error;

/// Axonsim error type
#[derive(Debug, Error)]
pub enum AxonError {
    /// Time grid rejected at construction
    #[error("Invalid time grid: {0}")]
    Grid(String),

    /// Export refused: trajectory carries a NaN/Inf sample
    #[error("Non-finite sample at t = {t} ms")]
    NonFinite { t: f64 },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AxonError>;
