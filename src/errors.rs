use thiserror::Error;

/// Error type that captures common report-generation failures.
#[derive(Debug, Error)]
pub enum InsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),
}
