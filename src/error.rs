use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProcessingError>;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid coordinate format: {0}")]
    InvalidFormat(String),

    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),

    #[error("Ambiguous coordinate source: {0}")]
    AmbiguousSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Report serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
