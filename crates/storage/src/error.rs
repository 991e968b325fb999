use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Athlete {0} not found")]
    NotFound(Uuid),

    #[error("An athlete with tax id {0} is already registered")]
    DuplicateKey(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound(_))
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(self, StorageError::DuplicateKey(_))
    }
}
