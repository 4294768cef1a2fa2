//! Errors raised by catalog mutations.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Rejected catalog change.
///
/// A draw that finds no winner is not an error; see `DrawOutcome` in the
/// catalog crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Bad item data: blank or multi-line name, negative or non-finite weight.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Stock or weight bookkeeping would be broken.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// No item carries the requested id.
    #[error("not found")]
    NotFound,

    /// An item with the same id is already in the catalog.
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::validation("weight must be finite").to_string(),
            "validation failed: weight must be finite"
        );
        assert_eq!(
            DomainError::conflict("item 1 already exists").to_string(),
            "conflict: item 1 already exists"
        );
        assert_eq!(DomainError::not_found().to_string(), "not found");
    }
}
