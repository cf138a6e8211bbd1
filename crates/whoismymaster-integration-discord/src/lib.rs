//! Discord Integration for WhoIsMyMaster
//!
//! Hosts a [`whoismymaster::Star`] plugin on a Discord bot: every inbound
//! message is tagged, and prefixed commands (e.g. `/whoami`) are answered
//! in the same channel.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use whoismymaster::{PluginConfig, WhoIsMyMaster};
//! use whoismymaster_integration_discord::{run, DiscordConfig};
//!
//! let plugin = Arc::new(WhoIsMyMaster::new(PluginConfig::from_toml(&text)?));
//! run(DiscordConfig::new("your-bot-token"), plugin).await?;
//! ```

mod client;
mod config;
mod gateway;
mod host;

pub use client::run;
pub use config::DiscordConfig;
pub use gateway::DiscordGatewayParser;
pub use host::DiscordHost;
