//! Discord configuration

use serde::{Deserialize, Serialize};

fn default_command_prefix() -> String {
    "/".to_string()
}

fn default_true() -> bool {
    true
}

/// Configuration for the Discord host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    /// Discord bot token
    #[serde(default)]
    pub token: String,
    /// Prefix that marks a message as a command (e.g. "/whoami")
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Whether to answer commands sent by DM
    #[serde(default = "default_true")]
    pub respond_to_dms: bool,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            ..Default::default()
        }
    }

    /// Set the command prefix
    pub fn with_command_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.command_prefix = prefix.into();
        self
    }

    /// Answer (or ignore) commands sent by DM
    pub fn with_respond_to_dms(mut self, respond: bool) -> Self {
        self.respond_to_dms = respond;
        self
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            command_prefix: default_command_prefix(),
            respond_to_dms: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder() {
        let config = DiscordConfig::new("test-token")
            .with_command_prefix("!")
            .with_respond_to_dms(false);

        assert_eq!(config.token, "test-token");
        assert_eq!(config.command_prefix, "!");
        assert!(!config.respond_to_dms);
    }

    #[test]
    fn test_defaults_from_partial_config() {
        let config: DiscordConfig = serde_json::from_str(r#"{"token": "abc"}"#).unwrap();
        assert_eq!(config.command_prefix, "/");
        assert!(config.respond_to_dms);
    }
}
