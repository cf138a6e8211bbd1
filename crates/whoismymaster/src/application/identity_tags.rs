//! Identity Tags - cross-plugin side-channel
//!
//! Records the master flag per event ID so other plugins handling the same
//! event can read it without recomputing. A missing entry means "unknown",
//! not "not a master".

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use crate::domain::errors::DomainError;

/// Events remembered before the oldest tag is evicted
pub const DEFAULT_TAG_CAPACITY: usize = 1024;

#[derive(Debug, Default)]
struct TagStore {
    flags: HashMap<String, bool>,
    order: VecDeque<String>,
}

/// Bounded map from event ID to master flag
#[derive(Debug)]
pub struct IdentityTags {
    store: RwLock<TagStore>,
    capacity: usize,
}

impl IdentityTags {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TAG_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RwLock::new(TagStore::default()),
            capacity: capacity.max(1),
        }
    }

    /// Tag an event, evicting the oldest tag when full
    pub fn set(&self, event_id: &str, is_master: bool) -> Result<(), DomainError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| DomainError::lock("identity tags"))?;

        if store.flags.insert(event_id.to_string(), is_master).is_none() {
            store.order.push_back(event_id.to_string());
        }

        while store.order.len() > self.capacity {
            if let Some(oldest) = store.order.pop_front() {
                store.flags.remove(&oldest);
                tracing::trace!(event_id = %oldest, "Evicted identity tag");
            }
        }

        Ok(())
    }

    /// Master flag of an event; `None` when the event was never tagged
    pub fn is_master(&self, event_id: &str) -> Option<bool> {
        let store = self.store.read().ok()?;
        store.flags.get(event_id).copied()
    }

    /// Drop the tag once the host is done with the event
    pub fn release(&self, event_id: &str) -> Option<bool> {
        let mut store = self.store.write().ok()?;
        let flag = store.flags.remove(event_id)?;
        store.order.retain(|id| id != event_id);
        Some(flag)
    }

    pub fn len(&self) -> usize {
        self.store.read().map(|s| s.flags.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for IdentityTags {
    fn default() -> Self {
        Self::new()
    }
}
