//! Discord gateway payload parsing
//!
//! Turns raw gateway dispatch payloads into domain messages, for hosts that
//! receive Discord events over a relay instead of a serenity client.

use serde::Deserialize;
use tracing::debug;
use whoismymaster::{DomainError, InboundMessage, MessageType, Sender};

/// Parser for Discord gateway dispatch events
#[derive(Debug, Default)]
pub struct DiscordGatewayParser;

impl DiscordGatewayParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a Discord gateway event into an InboundMessage
    ///
    /// Returns `None` for events that are not user messages.
    pub fn parse_gateway_event(
        &self,
        event_type: &str,
        data: &serde_json::Value,
    ) -> Result<Option<InboundMessage>, DomainError> {
        match event_type {
            "MESSAGE_CREATE" => self.parse_message_create(data),
            _ => {
                debug!(event_type = %event_type, "Ignoring Discord gateway event");
                Ok(None)
            }
        }
    }

    fn parse_message_create(
        &self,
        data: &serde_json::Value,
    ) -> Result<Option<InboundMessage>, DomainError> {
        let msg: GatewayMessage = serde_json::from_value(data.clone())
            .map_err(|e| DomainError::Validation(format!("Invalid MESSAGE_CREATE: {}", e)))?;

        // Ignore bot messages
        if msg.author.bot.unwrap_or(false) {
            return Ok(None);
        }

        let message_type = if msg.guild_id.is_none() {
            MessageType::Private
        } else {
            MessageType::Group
        };
        let name = msg.author.global_name.unwrap_or(msg.author.username);

        Ok(Some(
            InboundMessage::new(Sender::new(msg.author.id, name), msg.content, "discord")
                .with_event_id(msg.id)
                .with_message_type(message_type),
        ))
    }
}

// Internal types for parsing Discord events

#[derive(Debug, Deserialize)]
struct GatewayMessage {
    id: String,
    guild_id: Option<String>,
    author: GatewayAuthor,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct GatewayAuthor {
    id: String,
    username: String,
    global_name: Option<String>,
    bot: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_create() {
        let parser = DiscordGatewayParser::new();
        let data = serde_json::json!({
            "id": "123",
            "channel_id": "456",
            "guild_id": "789",
            "author": {
                "id": "user123",
                "username": "testuser",
                "global_name": "Test User",
                "bot": false
            },
            "content": "/whoami"
        });

        let msg = parser
            .parse_gateway_event("MESSAGE_CREATE", &data)
            .unwrap()
            .expect("Expected a message");

        assert_eq!(msg.event_id, "123");
        assert_eq!(msg.sender, Sender::new("user123", "Test User"));
        assert_eq!(msg.message_type, MessageType::Group);
        assert_eq!(msg.text, "/whoami");
        assert_eq!(msg.platform, "discord");
    }

    #[test]
    fn test_ignore_bot_messages() {
        let parser = DiscordGatewayParser::new();
        let data = serde_json::json!({
            "id": "123",
            "channel_id": "456",
            "guild_id": "789",
            "author": {
                "id": "bot123",
                "username": "botuser",
                "bot": true
            },
            "content": "Bot message"
        });

        assert!(parser.parse_message_create(&data).unwrap().is_none());
    }

    #[test]
    fn test_parse_dm() {
        let parser = DiscordGatewayParser::new();
        let data = serde_json::json!({
            "id": "123",
            "channel_id": "456",
            "author": {
                "id": "user123",
                "username": "testuser"
            },
            "content": "DM message"
        });

        let msg = parser.parse_message_create(&data).unwrap().unwrap();
        assert_eq!(msg.message_type, MessageType::Private);
        assert_eq!(msg.sender.name, "testuser");
    }

    #[test]
    fn test_invalid_payload() {
        let parser = DiscordGatewayParser::new();
        let err = parser
            .parse_gateway_event("MESSAGE_CREATE", &serde_json::json!({"id": 1}))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_other_events_ignored() {
        let parser = DiscordGatewayParser::new();
        let event = parser
            .parse_gateway_event("TYPING_START", &serde_json::json!({}))
            .unwrap();
        assert!(event.is_none());
    }
}
