use thiserror::Error;

#[derive(Debug, Error)]
pub enum PermenetError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Result length {actual} does not match expected length {expected}")]
    ContractViolation { expected: usize, actual: usize },

    #[error("Descriptor index out of bounds: {0}")]
    DescriptorIndex(usize),

    #[error("Descriptor value must be finite, got {0}")]
    NonFiniteValue(f64),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, PermenetError>;
