//! Domain Errors
//!
//! Error types for identity operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Event error: {field} unavailable on event {event_id}: {reason}")]
    Event {
        event_id: String,
        field: String,
        reason: String,
    },

    #[error("Lock poisoned: {0}")]
    Lock(String),
}

impl DomainError {
    pub fn event<T: AsRef<str>>(event_id: &str, field: T, reason: impl Into<String>) -> Self {
        Self::Event {
            event_id: event_id.to_string(),
            field: field.as_ref().to_string(),
            reason: reason.into(),
        }
    }

    pub fn lock<T: AsRef<str>>(what: T) -> Self {
        Self::Lock(what.as_ref().to_string())
    }
}
