// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failure taxonomy shared by entities and repositories.
///
/// `NotFound` is a distinguished outcome, never folded into `Persistence`:
/// upstream layers pick different status codes for the two (404 vs 500).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

impl DomainError {
    /// The bare message, without the variant prefix added by `Display`.
    /// Field-level validation reporting wants the message alone.
    pub fn message(&self) -> &str {
        match self {
            Self::Validation(msg)
            | Self::Conflict(msg)
            | Self::NotFound(msg)
            | Self::Persistence(msg) => msg,
        }
    }
}
