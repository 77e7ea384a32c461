use std::result::Result as StdResult;

use thiserror::Error;

/// Error type shared by the domain, storage and service layers.
#[derive(Debug, Error, PartialEq)]
pub enum AccountingError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = StdResult<T, AccountingError>;

impl AccountingError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AccountingError::Validation(_))
    }
}

impl From<std::io::Error> for AccountingError {
    fn from(err: std::io::Error) -> Self {
        AccountingError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AccountingError {
    fn from(err: serde_json::Error) -> Self {
        AccountingError::Serialization(err.to_string())
    }
}
