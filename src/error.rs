use thiserror::Error;

/// Errors from the reporting and export surface. The simulation core itself
/// never fails.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid seed '{0}': expected an unsigned integer")]
    InvalidSeed(String),

    #[error("trace is empty")]
    EmptyTrace,
}

pub type Result<T> = std::result::Result<T, SimError>;
