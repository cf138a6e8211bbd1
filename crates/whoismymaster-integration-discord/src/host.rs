//! Serenity event handler hosting a plugin

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::gateway::Ready;
use serenity::prelude::{Context, EventHandler};
use tracing::{debug, error, info};
use whoismymaster::{
    command_keyword, InboundMessage, MessageEvent, MessageType, PlainResult, Sender, Star,
    Subscription,
};

use crate::config::DiscordConfig;

/// Routes Discord messages to a plugin according to its subscriptions
pub struct DiscordHost {
    plugin: Arc<dyn Star>,
    config: DiscordConfig,
}

impl DiscordHost {
    pub fn new(config: DiscordConfig, plugin: Arc<dyn Star>) -> Self {
        Self { plugin, config }
    }

    /// Convert serenity Message to domain message
    fn convert_message(&self, msg: &SerenityMessage) -> InboundMessage {
        // Convert serenity's time::OffsetDateTime to chrono::DateTime<Utc>
        let timestamp = DateTime::<Utc>::from_timestamp(
            msg.timestamp.unix_timestamp(),
            msg.timestamp.nanosecond(),
        )
        .unwrap_or_else(Utc::now);

        let message_type = if msg.guild_id.is_some() {
            MessageType::Group
        } else {
            MessageType::Private
        };
        let name = msg
            .author
            .global_name
            .clone()
            .unwrap_or_else(|| msg.author.name.clone());

        InboundMessage::new(Sender::new(msg.author.id, name), msg.content.clone(), "discord")
            .with_event_id(msg.id.to_string())
            .with_message_type(message_type)
            .with_timestamp(timestamp)
    }

    /// Run every subscribed hook for one message and collect command replies
    pub async fn dispatch(&self, event: &dyn MessageEvent) -> Vec<PlainResult> {
        let message_type = event.message_type();
        let keyword = command_keyword(event.message_str(), &self.config.command_prefix);
        let mut replies = Vec::new();

        for subscription in self.plugin.subscriptions() {
            match subscription {
                Subscription::EventMessageType(filter) if filter.matches(message_type) => {
                    self.plugin.on_message(event).await;
                }
                Subscription::Command(command) if keyword == Some(command) => {
                    if message_type == MessageType::Private && !self.config.respond_to_dms {
                        debug!(command = %command, "Ignoring command sent by DM");
                        continue;
                    }
                    replies.extend(self.plugin.handle_command(command, event).await);
                }
                // No LLM provider is attached to this host
                _ => {}
            }
        }

        replies
    }
}

#[async_trait]
impl EventHandler for DiscordHost {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        let metadata = self.plugin.metadata();
        info!(
            user = %ready.user.name,
            plugin = %metadata.name,
            version = %metadata.version,
            "Discord host connected"
        );
    }

    async fn message(&self, ctx: Context, msg: SerenityMessage) {
        if msg.author.bot {
            return;
        }

        let event = self.convert_message(&msg);
        for reply in self.dispatch(&event).await {
            debug!(
                channel_id = %msg.channel_id,
                content_len = %reply.text.len(),
                "Sending command reply to Discord"
            );
            if let Err(e) = msg.channel_id.say(&ctx.http, &reply.text).await {
                error!(error = %e, "Failed to send Discord message");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use whoismymaster::{DomainError, PluginConfig, WhoIsMyMaster, MASTER_ID_KEY};

    use crate::gateway::DiscordGatewayParser;

    /// Event from a host other than serenity, seen only through the trait
    struct RelayedEvent {
        text: &'static str,
    }

    impl MessageEvent for RelayedEvent {
        fn event_id(&self) -> &str {
            "relay-1"
        }
        fn sender_id(&self) -> Result<String, DomainError> {
            Ok("42".into())
        }
        fn sender_name(&self) -> Result<String, DomainError> {
            Ok("Relay".into())
        }
        fn message_type(&self) -> MessageType {
            MessageType::Private
        }
        fn message_str(&self) -> &str {
            self.text
        }
    }

    async fn host(config: DiscordConfig) -> (DiscordHost, Arc<WhoIsMyMaster>) {
        let plugin = Arc::new(WhoIsMyMaster::new(
            PluginConfig::new().with(MASTER_ID_KEY, json!(["42"])),
        ));
        plugin.initialize().await;
        (DiscordHost::new(config, plugin.clone()), plugin)
    }

    fn message(id: &str, text: &str, message_type: MessageType) -> InboundMessage {
        InboundMessage::new(Sender::new(id, "someone"), text, "discord")
            .with_message_type(message_type)
    }

    #[tokio::test]
    async fn test_plain_message_is_tagged_without_reply() {
        let (host, plugin) = host(DiscordConfig::new("t")).await;
        let event = message("42", "hello", MessageType::Group);

        let replies = host.dispatch(&event).await;

        assert!(replies.is_empty());
        assert_eq!(plugin.tags().is_master(&event.event_id), Some(true));
    }

    #[tokio::test]
    async fn test_whoami_command_replies_once() {
        let (host, plugin) = host(DiscordConfig::new("t")).await;
        let event = message("7", "/whoami", MessageType::Group);

        let replies = host.dispatch(&event).await;

        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("👤"));
        assert_eq!(plugin.tags().is_master(&event.event_id), Some(false));
    }

    #[tokio::test]
    async fn test_custom_prefix() {
        let (host, _) = host(DiscordConfig::new("t").with_command_prefix("!")).await;
        assert!(host
            .dispatch(&message("42", "/whoami", MessageType::Group))
            .await
            .is_empty());
        assert_eq!(
            host.dispatch(&message("42", "!whoami", MessageType::Group))
                .await
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_dm_commands_can_be_disabled() {
        let (host, plugin) = host(DiscordConfig::new("t").with_respond_to_dms(false)).await;
        let event = message("42", "/whoami", MessageType::Private);

        assert!(host.dispatch(&event).await.is_empty());
        // Still tagged for other plugins
        assert_eq!(plugin.tags().is_master(&event.event_id), Some(true));
    }

    #[tokio::test]
    async fn test_dispatch_reads_event_through_trait() {
        let (quiet, _) = host(DiscordConfig::new("t").with_respond_to_dms(false)).await;
        let (host, plugin) = host(DiscordConfig::new("t")).await;

        let replies = host.dispatch(&RelayedEvent { text: "/whoami" }).await;
        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("Relay"));
        assert!(replies[0].text.contains("👑"));
        assert_eq!(plugin.tags().is_master("relay-1"), Some(true));

        assert!(quiet.dispatch(&RelayedEvent { text: "/whoami" }).await.is_empty());
    }

    #[tokio::test]
    async fn test_gateway_payload_dispatch() {
        let (host, plugin) = host(DiscordConfig::new("t")).await;
        let data = json!({
            "id": "9001",
            "guild_id": "1",
            "author": { "id": "42", "username": "owner" },
            "content": "/whoami"
        });

        let event = DiscordGatewayParser::new()
            .parse_gateway_event("MESSAGE_CREATE", &data)
            .unwrap()
            .unwrap();
        let replies = host.dispatch(&event).await;

        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("owner"));
        assert_eq!(plugin.tags().is_master("9001"), Some(true));
    }
}
