//! Provider Request Entity
//!
//! The outbound LLM request a host prepares before dispatching it to a
//! provider. Hooks may mutate it in place.

use serde::{Deserialize, Serialize};

/// Request about to be sent to an LLM provider
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// The current user turn
    pub prompt: String,
    /// Persistent instructions; empty means "no system prompt yet"
    #[serde(default)]
    pub system_prompt: String,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Set the system prompt
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = system_prompt.into();
        self
    }

    /// Append a paragraph to the system prompt
    ///
    /// Existing text is kept verbatim and separated from the new paragraph
    /// by a blank line. An empty system prompt is replaced outright.
    pub fn append_system_prompt(&mut self, paragraph: &str) {
        if self.system_prompt.is_empty() {
            self.system_prompt = paragraph.to_string();
        } else {
            self.system_prompt.push_str("\n\n");
            self.system_prompt.push_str(paragraph);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_to_empty_sets_prompt() {
        let mut req = ProviderRequest::new("hi");
        req.append_system_prompt("note");
        assert_eq!(req.system_prompt, "note");
    }

    #[test]
    fn test_append_keeps_existing_prefix() {
        let mut req = ProviderRequest::new("hi").with_system_prompt("You are a cat.");
        req.append_system_prompt("note");
        assert_eq!(req.system_prompt, "You are a cat.\n\nnote");
    }
}
