// Copyright 2025 Cowboy AI, LLC.

//! Error types for household domain operations

use thiserror::Error;

/// Errors that can occur in domain operations
///
/// Most household rules never fail: guarded mutations are refused silently and
/// unknown currencies fall back to a neutral rate. Errors only surface for
/// construction invariants and for loading external rate tables.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Invariant violation
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}

impl DomainError {
    /// Check if this is a validation error
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            DomainError::ValidationError(_) | DomainError::InvariantViolation(_)
        )
    }
}
