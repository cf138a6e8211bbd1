//! Inbound Message Entity
//!
//! Represents a message received from a chat platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Sender;

/// Kind of conversation the message arrived in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Group / guild channel
    #[default]
    Group,
    /// Direct / private message
    Private,
    /// Anything else the platform delivers (system notices, etc.)
    Other,
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MessageType::Group => write!(f, "group"),
            MessageType::Private => write!(f, "private"),
            MessageType::Other => write!(f, "other"),
        }
    }
}

/// A message from a chat platform (Discord, QQ, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Host-assigned event ID, unique per inbound event
    pub event_id: String,
    /// Who sent the message
    pub sender: Sender,
    /// Conversation kind
    pub message_type: MessageType,
    /// Plain text content
    pub text: String,
    /// Platform name ("discord", "cli", etc.)
    pub platform: String,
    /// When the message was received
    pub timestamp: DateTime<Utc>,
}

impl InboundMessage {
    /// Create a new message with a freshly generated event ID
    pub fn new(sender: Sender, text: impl Into<String>, platform: impl Into<String>) -> Self {
        Self {
            event_id: Uuid::new_v4().to_string(),
            sender,
            message_type: MessageType::default(),
            text: text.into(),
            platform: platform.into(),
            timestamp: Utc::now(),
        }
    }

    /// Use the platform's own event ID
    pub fn with_event_id(mut self, event_id: impl Into<String>) -> Self {
        self.event_id = event_id.into();
        self
    }

    /// Set message type
    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    /// Set timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }
}
