//! WhoIsMyMaster Domain Library
//!
//! Recognizes the bot's owner ("master") among chat senders and tells the
//! language model who it is talking to.
//!
//! # Architecture
//!
//! This crate follows the same Hexagonal layout as its host adapters expect:
//!
//! - **Domain Layer** (`domain/`): Pure types and rules
//!   - `entities/`: Per-event models (Sender, InboundMessage, ProviderRequest)
//!   - `value_objects/`: Immutable values (MasterIds, Role, Identity)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Traits the host runtime implements or calls
//!   - `config`: Plugin configuration source
//!   - `event`: Inbound message event
//!   - `star`: Plugin lifecycle, hooks and command surface
//!
//! - **Application** (`application/`): The identity annotator, the
//!   cross-plugin identity tags and the `WhoIsMyMaster` plugin itself
//!
//! # Usage
//!
//! ```rust,ignore
//! use whoismymaster::{PluginConfig, Star, WhoIsMyMaster};
//!
//! let config = PluginConfig::from_json(r#"{"master_id": ["10001"]}"#)?;
//! let plugin = WhoIsMyMaster::new(config);
//! plugin.initialize().await;
//! ```

pub mod application;
pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use application::{
    command_keyword, IdentityAnnotator, IdentityTags, Outcome, WhoIsMyMaster, DEFAULT_TAG_CAPACITY,
    WHOAMI_COMMAND, WHOAMI_FAILURE_REPLY,
};
pub use domain::{
    DomainError, Identity, InboundMessage, MasterIds, MessageType, ProviderRequest, Role, Sender,
};
pub use ports::{
    ConfigSource, MessageEvent, MessageTypeFilter, PlainResult, PluginConfig, PluginMetadata,
    Star, Subscription, MASTER_ID_KEY,
};
