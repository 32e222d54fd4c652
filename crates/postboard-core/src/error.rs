//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: Uuid },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Unsupported media type: {0}")]
    InvalidMediaType(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Raised for both "no such record" and "record owned by someone else".
    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Persistence failure: {0}")]
    Persistence(String),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Blob store errors.
#[derive(Debug, Error)]
pub enum BlobError {
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    #[error("Invalid blob name: {0}")]
    InvalidName(String),

    #[error("Blob storage I/O failed: {0}")]
    Io(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        DomainError::Persistence(err.to_string())
    }
}

impl From<BlobError> for DomainError {
    fn from(err: BlobError) -> Self {
        match err {
            BlobError::UnsupportedMediaType(media_type) => DomainError::InvalidMediaType(media_type),
            BlobError::InvalidName(name) => {
                DomainError::Validation(format!("invalid file name: {name}"))
            }
            BlobError::Io(msg) => DomainError::Persistence(msg),
        }
    }
}
