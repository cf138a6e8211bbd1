//! WhoIsMyMaster plugin
//!
//! Binds the [`IdentityAnnotator`] to the host's [`Star`] lifecycle.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::annotator::IdentityAnnotator;
use super::identity_tags::IdentityTags;
use crate::domain::entities::ProviderRequest;
use crate::ports::config::{ConfigSource, PluginConfig};
use crate::ports::event::MessageEvent;
use crate::ports::star::{MessageTypeFilter, PlainResult, PluginMetadata, Star, Subscription};

/// Keyword of the identity diagnostic command
pub const WHOAMI_COMMAND: &str = "whoami";

/// Reply sent when `whoami` cannot resolve the caller
pub const WHOAMI_FAILURE_REPLY: &str = "查询身份信息时发生错误";

const METADATA: PluginMetadata = PluginMetadata {
    name: "whoismymaster",
    author: "gameswu",
    description: "识别机器人主人身份并注入系统提示词",
    version: "1.0.0",
};

/// Extract the command keyword from a message
///
/// The message must start with `wake_prefix`; the keyword is the first
/// whitespace-separated token after it.
pub fn command_keyword<'a>(text: &'a str, wake_prefix: &str) -> Option<&'a str> {
    text.trim_start()
        .strip_prefix(wake_prefix)?
        .split_whitespace()
        .next()
}

/// The owner-recognition plugin
pub struct WhoIsMyMaster<C: ConfigSource = PluginConfig> {
    config: C,
    annotator: IdentityAnnotator,
}

impl<C: ConfigSource> WhoIsMyMaster<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            annotator: IdentityAnnotator::new(),
        }
    }

    /// Share a tag store with other plugins on the same host
    pub fn with_tags(config: C, tags: Arc<IdentityTags>) -> Self {
        Self {
            config,
            annotator: IdentityAnnotator::with_tags(tags),
        }
    }

    pub fn annotator(&self) -> &IdentityAnnotator {
        &self.annotator
    }

    /// Cross-plugin identity tags
    pub fn tags(&self) -> Arc<IdentityTags> {
        self.annotator.tags()
    }
}

#[async_trait]
impl<C: ConfigSource> Star for WhoIsMyMaster<C> {
    fn metadata(&self) -> PluginMetadata {
        METADATA
    }

    fn subscriptions(&self) -> Vec<Subscription> {
        vec![
            Subscription::OnLlmRequest,
            Subscription::EventMessageType(MessageTypeFilter::All),
            Subscription::Command(WHOAMI_COMMAND),
        ]
    }

    async fn initialize(&self) {
        let _ = self.annotator.initialize(&self.config);
    }

    async fn terminate(&self) {
        self.annotator.terminate();
    }

    async fn on_llm_request(&self, event: &dyn MessageEvent, request: &mut ProviderRequest) {
        let _ = self.annotator.on_llm_request(event, request);
    }

    async fn on_message(&self, event: &dyn MessageEvent) {
        let _ = self.annotator.on_message(event);
    }

    async fn handle_command(&self, command: &str, event: &dyn MessageEvent) -> Vec<PlainResult> {
        if command != WHOAMI_COMMAND {
            debug!(command = %command, "Ignoring unknown command");
            return Vec::new();
        }

        let text = self
            .annotator
            .whoami(event)
            .unwrap_or_else(|_| WHOAMI_FAILURE_REPLY.to_string());
        vec![PlainResult::new(text)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{InboundMessage, MessageType, Sender};
    use crate::domain::errors::DomainError;
    use crate::ports::config::MASTER_ID_KEY;
    use serde_json::json;

    struct NamelessEvent;

    impl MessageEvent for NamelessEvent {
        fn event_id(&self) -> &str {
            "nameless"
        }
        fn sender_id(&self) -> Result<String, DomainError> {
            Ok("u1".into())
        }
        fn sender_name(&self) -> Result<String, DomainError> {
            Err(DomainError::event("nameless", "sender_name", "not resolvable"))
        }
        fn message_type(&self) -> MessageType {
            MessageType::Private
        }
        fn message_str(&self) -> &str {
            "/whoami"
        }
    }

    async fn plugin(ids: serde_json::Value) -> WhoIsMyMaster {
        let plugin = WhoIsMyMaster::new(PluginConfig::new().with(MASTER_ID_KEY, ids));
        plugin.initialize().await;
        plugin
    }

    #[test]
    fn test_command_keyword() {
        assert_eq!(command_keyword("/whoami", "/"), Some("whoami"));
        assert_eq!(command_keyword("  /whoami extra", "/"), Some("whoami"));
        assert_eq!(command_keyword("whoami", "/"), None);
        assert_eq!(command_keyword("/", "/"), None);
        assert_eq!(command_keyword("whoami", ""), Some("whoami"));
    }

    #[test]
    fn test_subscriptions() {
        let plugin = WhoIsMyMaster::new(PluginConfig::new());
        let subs = plugin.subscriptions();
        assert!(subs.contains(&Subscription::OnLlmRequest));
        assert!(subs.contains(&Subscription::EventMessageType(MessageTypeFilter::All)));
        assert!(subs.contains(&Subscription::Command("whoami")));
        assert_eq!(plugin.metadata().name, "whoismymaster");
    }

    #[tokio::test]
    async fn test_whoami_single_reply() {
        let plugin = plugin(json!(["u1"])).await;
        let event = InboundMessage::new(Sender::new("u1", "Alice"), "/whoami", "test");

        let replies = plugin.handle_command(WHOAMI_COMMAND, &event).await;

        assert_eq!(replies.len(), 1);
        assert!(replies[0].text.contains("Alice"));
        assert!(replies[0].text.contains("👑"));
    }

    #[tokio::test]
    async fn test_whoami_failure_reply() {
        let plugin = plugin(json!(["u1"])).await;
        let replies = plugin.handle_command(WHOAMI_COMMAND, &NamelessEvent).await;
        assert_eq!(replies, vec![PlainResult::new(WHOAMI_FAILURE_REPLY)]);
    }

    #[tokio::test]
    async fn test_unknown_command_is_ignored() {
        let plugin = plugin(json!(["u1"])).await;
        let event = InboundMessage::new(Sender::new("u1", "Alice"), "/help", "test");
        assert!(plugin.handle_command("help", &event).await.is_empty());
    }

    #[tokio::test]
    async fn test_hooks_through_star() {
        let plugin = plugin(json!(["u1"])).await;
        let event = InboundMessage::new(Sender::new("u2", "Bob"), "hi", "test")
            .with_message_type(MessageType::Private);

        plugin.on_message(&event).await;
        assert_eq!(plugin.tags().is_master(&event.event_id), Some(false));

        let mut req = ProviderRequest::new("hi").with_system_prompt("base");
        plugin.on_llm_request(&event, &mut req).await;
        assert!(req.system_prompt.starts_with("base\n\n"));
        assert!(req.system_prompt.contains("Bob"));

        plugin.terminate().await;
    }

    #[tokio::test]
    async fn test_empty_config_does_not_crash() {
        let plugin = WhoIsMyMaster::new(PluginConfig::new());
        plugin.initialize().await;
        let event = InboundMessage::new(Sender::new("u2", "Bob"), "/whoami", "test");

        let replies = plugin.handle_command(WHOAMI_COMMAND, &event).await;

        assert!(replies[0].text.contains("Bob"));
        assert!(replies[0].text.contains("u2"));
        assert!(replies[0].text.contains("👤"));
    }
}
