//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid business data.
/// The projection and tier computations themselves never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid commission schedule: {message}")]
    InvalidSchedule { message: String },

    #[error("level out of range: {0} (expected 1..=5)")]
    LevelOutOfRange(usize),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
