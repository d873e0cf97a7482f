//! Error taxonomy for consumption analysis
//!
//! Library operations return [`AnalysisError`]; the command layer wraps it in
//! `anyhow` with additional context.

use thiserror::Error;

pub type EnergyResult<T> = std::result::Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient data: at least {required} months are required, got {found}")]
    InsufficientData { found: usize, required: usize },

    #[error("invalid {field}: {value} (must be a non-negative number)")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("too many records: at most {max} months are accepted, got {found}")]
    TooManyRecords { found: usize, max: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
