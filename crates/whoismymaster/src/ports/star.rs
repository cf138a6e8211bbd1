//! Plugin ("Star") Port
//!
//! Lifecycle, hook and command surface a host runtime drives. The host
//! reads [`Star::subscriptions`] once at load time and routes events
//! accordingly; plugins never call each other directly.
//!
//! # Example
//!
//! ```rust,ignore
//! for sub in plugin.subscriptions() {
//!     match sub {
//!         Subscription::OnLlmRequest => host.before_llm_request(plugin.clone()),
//!         Subscription::EventMessageType(filter) => host.on_message(filter, plugin.clone()),
//!         Subscription::Command(keyword) => host.command(keyword, plugin.clone()),
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::event::MessageEvent;
use crate::domain::entities::{MessageType, ProviderRequest};

/// Static plugin registration info
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub author: &'static str,
    pub description: &'static str,
    pub version: &'static str,
}

/// Which inbound messages a message hook wants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageTypeFilter {
    All,
    Group,
    Private,
}

impl MessageTypeFilter {
    pub fn matches(self, message_type: MessageType) -> bool {
        match self {
            MessageTypeFilter::All => true,
            MessageTypeFilter::Group => message_type == MessageType::Group,
            MessageTypeFilter::Private => message_type == MessageType::Private,
        }
    }
}

/// A host registration requested by a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    /// Run `on_llm_request` before every LLM request is dispatched
    OnLlmRequest,
    /// Run `on_message` for inbound messages matching the filter
    EventMessageType(MessageTypeFilter),
    /// Route the command keyword to `handle_command`
    Command(&'static str),
}

/// A plain-text reply produced by a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainResult {
    pub text: String,
}

impl PlainResult {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Plugin interface driven by the host runtime
///
/// Hooks never fail from the host's point of view: implementations handle
/// and log their own errors.
#[async_trait]
pub trait Star: Send + Sync {
    /// Registration info
    fn metadata(&self) -> PluginMetadata;

    /// Hooks and commands the host should route to this plugin
    fn subscriptions(&self) -> Vec<Subscription>;

    /// Called once the plugin is loaded (and again on reload)
    async fn initialize(&self);

    /// Called when the plugin is unloaded
    async fn terminate(&self) {}

    /// Called before an LLM request is dispatched; may mutate the request
    async fn on_llm_request(&self, _event: &dyn MessageEvent, _request: &mut ProviderRequest) {}

    /// Called for every inbound message matching the subscription filter
    async fn on_message(&self, _event: &dyn MessageEvent) {}

    /// Called when a subscribed command keyword is invoked
    async fn handle_command(&self, _command: &str, _event: &dyn MessageEvent) -> Vec<PlainResult> {
        Vec::new()
    }
}
