//! Configuration management for WhoIsMyMaster CLI
//!
//! Stores the master list and Discord settings in
//! ~/.config/whoismymaster/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use whoismymaster::{PluginConfig, MASTER_ID_KEY};
use whoismymaster_integration_discord::DiscordConfig;

const CONFIG_DIR: &str = "whoismymaster";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub master_id: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discord: Option<DiscordConfig>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Add a master ID; false if already present
    pub fn add_master(&mut self, id: String) -> bool {
        if self.master_id.contains(&id) {
            false
        } else {
            self.master_id.push(id);
            true
        }
    }

    /// Remove a master ID
    pub fn remove_master(&mut self, id: &str) -> bool {
        let before = self.master_id.len();
        self.master_id.retain(|m| m != id);
        self.master_id.len() != before
    }

    /// Plugin configuration as the host would hand it over
    ///
    /// An empty list is passed through as "not configured".
    pub fn plugin_config(&self) -> PluginConfig {
        let config = PluginConfig::new();
        if self.master_id.is_empty() {
            config
        } else {
            config.with(MASTER_ID_KEY, serde_json::json!(self.master_id))
        }
    }
}
