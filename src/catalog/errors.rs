use thiserror::Error;

/// Errors raised by the catalog pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse record, error: {0}")]
    ParseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
