//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SepaError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error: {0}")]
    Xml(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

pub type Result<T> = std::result::Result<T, SepaError>;
