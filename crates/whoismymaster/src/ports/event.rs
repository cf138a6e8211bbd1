//! Message Event Port
//!
//! Read-only view of a host-owned inbound event. Accessors are fallible
//! because hosts may fail to resolve sender details (deleted accounts,
//! partial payloads, ...).

use crate::domain::entities::{InboundMessage, MessageType, Sender};
use crate::domain::errors::DomainError;

/// Inbound event as seen by plugins
pub trait MessageEvent: Send + Sync {
    /// Host-assigned ID, unique per event
    fn event_id(&self) -> &str;

    /// Sender's platform ID in string form
    fn sender_id(&self) -> Result<String, DomainError>;

    /// Sender's display name
    fn sender_name(&self) -> Result<String, DomainError>;

    /// Conversation kind
    fn message_type(&self) -> MessageType;

    /// Plain text content
    fn message_str(&self) -> &str;

    /// Sender descriptor for this event
    fn sender(&self) -> Result<Sender, DomainError> {
        Ok(Sender {
            id: self.sender_id()?,
            name: self.sender_name()?,
        })
    }
}

impl MessageEvent for InboundMessage {
    fn event_id(&self) -> &str {
        &self.event_id
    }

    fn sender_id(&self) -> Result<String, DomainError> {
        Ok(self.sender.id.clone())
    }

    fn sender_name(&self) -> Result<String, DomainError> {
        Ok(self.sender.name.clone())
    }

    fn message_type(&self) -> MessageType {
        self.message_type
    }

    fn message_str(&self) -> &str {
        &self.text
    }
}
