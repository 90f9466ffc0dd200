use thiserror::Error;

/// Common error types used across the DSM system
#[derive(Error, Debug)]
pub enum DsmError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Fixture error: {0}")]
    Fixture(String),
}

/// Result type for DSM operations
pub type Result<T> = std::result::Result<T, DsmError>;
