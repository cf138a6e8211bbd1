//! Hook outcome
//!
//! Hooks swallow their errors so the host pipeline keeps going, but callers
//! (and tests) still need to see whether the hook did its job.

use crate::domain::errors::DomainError;

/// Result of a host callback that never propagates errors
#[must_use]
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// The hook ran and produced `T`
    Applied(T),
    /// The hook failed, logged the reason and left everything untouched
    Failed(DomainError),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Outcome::Applied(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&DomainError> {
        match self {
            Outcome::Applied(_) => None,
            Outcome::Failed(e) => Some(e),
        }
    }

    /// Value on success, otherwise a fallback derived from the error
    pub fn unwrap_or_else(self, fallback: impl FnOnce(DomainError) -> T) -> T {
        match self {
            Outcome::Applied(value) => value,
            Outcome::Failed(e) => fallback(e),
        }
    }
}

impl<T> From<Result<T, DomainError>> for Outcome<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => Outcome::Applied(value),
            Err(e) => Outcome::Failed(e),
        }
    }
}
