//! Configuration Port
//!
//! The host hands every plugin a key/value configuration object. Only one
//! key is read here: `master_id`.

use serde_json::{Map, Value};

use crate::domain::errors::DomainError;

/// Configuration key holding the master identifier list
pub const MASTER_ID_KEY: &str = "master_id";

/// Read access to plugin configuration
pub trait ConfigSource: Send + Sync {
    /// Look up a raw option; `Ok(None)` when the key is absent
    fn get(&self, key: &str) -> Result<Option<Value>, DomainError>;
}

/// In-memory plugin configuration backed by a JSON object
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PluginConfig {
    values: Map<String, Value>,
}

impl PluginConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value, which must be an object
    pub fn from_value(value: Value) -> Result<Self, DomainError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(DomainError::Config(format!(
                "plugin config must be an object, got {}",
                other
            ))),
        }
    }

    /// Parse a JSON document
    pub fn from_json(content: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| DomainError::Config(format!("Invalid JSON config: {}", e)))?;
        Self::from_value(value)
    }

    /// Parse a TOML document
    pub fn from_toml(content: &str) -> Result<Self, DomainError> {
        let value: Value = toml::from_str(content)
            .map_err(|e| DomainError::Config(format!("Invalid TOML config: {}", e)))?;
        Self::from_value(value)
    }

    /// Set an option
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl ConfigSource for PluginConfig {
    fn get(&self, key: &str) -> Result<Option<Value>, DomainError> {
        Ok(self.values.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_toml() {
        let config = PluginConfig::from_toml("master_id = [\"10001\", 10002]\n").unwrap();
        assert_eq!(
            config.get(MASTER_ID_KEY).unwrap(),
            Some(json!(["10001", 10002]))
        );
    }

    #[test]
    fn test_missing_key_is_none() {
        let config = PluginConfig::from_json("{}").unwrap();
        assert_eq!(config.get(MASTER_ID_KEY).unwrap(), None);
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = PluginConfig::from_json("[1, 2]").unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
