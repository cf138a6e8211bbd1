//! Role - Whether a sender owns the bot

use serde::{Deserialize, Serialize};

/// Sender role relative to the bot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Configured owner
    Master,
    /// Everyone else
    #[default]
    Ordinary,
}

impl Role {
    pub fn from_is_master(is_master: bool) -> Self {
        if is_master {
            Role::Master
        } else {
            Role::Ordinary
        }
    }

    pub fn is_master(self) -> bool {
        matches!(self, Role::Master)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Master => write!(f, "机器人主人 👑"),
            Role::Ordinary => write!(f, "普通用户 👤"),
        }
    }
}
