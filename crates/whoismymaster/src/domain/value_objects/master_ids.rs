//! MasterIds - The configured owner identifiers

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::errors::DomainError;

/// Ordered list of master identifiers in string form
///
/// Membership is exact string equality. Order only matters for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MasterIds(Vec<String>);

impl MasterIds {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: ToString,
    {
        Self(ids.into_iter().map(|id| id.to_string()).collect())
    }

    /// Build from a raw configuration value
    ///
    /// Accepts a list of strings/numbers/booleans, or a single one of them.
    /// Booleans print as `True`/`False`. `null` yields an empty set.
    pub fn from_value(value: &Value) -> Result<Self, DomainError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    scalar_to_string(item).ok_or_else(|| {
                        DomainError::Validation(format!(
                            "master_id[{}] must be a string, number or boolean, got {}",
                            index, item
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            other => scalar_to_string(other)
                .map(|id| Self(vec![id]))
                .ok_or_else(|| {
                    DomainError::Validation(format!(
                        "master_id must be a list of identifiers, got {}",
                        other
                    ))
                }),
        }
    }

    /// Whether the identifier's string form is one of the masters
    pub fn contains(&self, sender_id: &str) -> bool {
        self.0.iter().any(|id| id == sender_id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl std::fmt::Display for MasterIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.join(", "))
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        _ => None,
    }
}
