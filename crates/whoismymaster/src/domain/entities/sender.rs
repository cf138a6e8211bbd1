//! Sender Entity
//!
//! Transient descriptor of the author of one inbound event.

use serde::{Deserialize, Serialize};

/// Sender of an inbound event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sender {
    /// Platform-specific user ID
    pub id: String,
    /// Display name
    pub name: String,
}

impl Sender {
    /// Create a sender from any identifier the host supplies
    ///
    /// The identifier is normalized to its string form.
    pub fn new(id: impl ToString, name: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            name: name.into(),
        }
    }
}
