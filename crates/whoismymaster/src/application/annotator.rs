//! Identity Annotator
//!
//! Holds the master list and applies the identity classification at the
//! host's integration points: LLM request preparation, inbound message
//! tagging and the `whoami` command.

use std::fmt::Display;
use std::sync::{Arc, RwLock};

use tracing::{debug, error, info, warn};

use super::identity_tags::IdentityTags;
use super::outcome::Outcome;
use crate::domain::entities::ProviderRequest;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{Identity, MasterIds, Role};
use crate::ports::config::{ConfigSource, MASTER_ID_KEY};
use crate::ports::event::MessageEvent;

/// Classifies senders against the configured master list
///
/// The master list is an immutable snapshot; re-initialization swaps in a
/// new one, so readers never observe a half-loaded list.
#[derive(Debug)]
pub struct IdentityAnnotator {
    masters: RwLock<Arc<MasterIds>>,
    tags: Arc<IdentityTags>,
}

impl IdentityAnnotator {
    pub fn new() -> Self {
        Self::with_tags(Arc::new(IdentityTags::new()))
    }

    /// Share an existing tag store with other plugins
    pub fn with_tags(tags: Arc<IdentityTags>) -> Self {
        Self {
            masters: RwLock::new(Arc::new(MasterIds::default())),
            tags,
        }
    }

    /// Load `master_id` from configuration
    ///
    /// Absent or empty option only logs a warning; like a failed load, it
    /// keeps whatever list is already installed (empty on first load).
    pub fn initialize(&self, config: &dyn ConfigSource) -> Outcome<usize> {
        let result = config
            .get(MASTER_ID_KEY)
            .and_then(|raw| raw.map(|v| MasterIds::from_value(&v)).transpose());

        match result {
            Ok(Some(ids)) if !ids.is_empty() => {
                info!(count = ids.len(), "WhoIsMyMaster: 加载主人ID列表: {}", ids);
                let count = ids.len();
                self.replace_masters(ids);
                Outcome::Applied(count)
            }
            Ok(_) => {
                warn!("WhoIsMyMaster: 未找到主人ID配置，请在配置文件中设置 master_id 列表");
                Outcome::Applied(self.masters().len())
            }
            Err(e) => {
                error!(error = %e, "WhoIsMyMaster: 初始化失败: {}", e);
                Outcome::Failed(e)
            }
        }
    }

    /// Install a master list directly
    pub fn replace_masters(&self, ids: MasterIds) {
        let ids = Arc::new(ids);
        // Swapping an Arc cannot leave the list half-written, so a poisoned
        // lock still holds a consistent value.
        let mut guard = self.masters.write().unwrap_or_else(|p| p.into_inner());
        *guard = ids;
    }

    /// Current master list snapshot
    pub fn masters(&self) -> Arc<MasterIds> {
        let guard = self.masters.read().unwrap_or_else(|p| p.into_inner());
        Arc::clone(&guard)
    }

    /// Whether the identifier's string form is a configured master
    pub fn is_master(&self, sender_id: impl Display) -> bool {
        self.masters().contains(&sender_id.to_string())
    }

    /// Tag store shared with downstream plugins
    pub fn tags(&self) -> Arc<IdentityTags> {
        Arc::clone(&self.tags)
    }

    fn classify(&self, event: &dyn MessageEvent) -> Result<Identity, DomainError> {
        let sender = event.sender()?;
        let role = Role::from_is_master(self.is_master(&sender.id));
        Ok(Identity::new(sender, role))
    }

    /// Inject the identity sentence into the request's system prompt
    ///
    /// The request is only touched once the annotation is fully built.
    pub fn on_llm_request(
        &self,
        event: &dyn MessageEvent,
        request: &mut ProviderRequest,
    ) -> Outcome<Identity> {
        let identity = match self.classify(event) {
            Ok(identity) => identity,
            Err(e) => {
                error!(event_id = %event.event_id(), error = %e, "WhoIsMyMaster: 处理LLM请求时发生错误: {}", e);
                return Outcome::Failed(e);
            }
        };

        let Identity { sender, .. } = &identity;
        if identity.is_master() {
            info!(sender_id = %sender.id, "WhoIsMyMaster: 识别到主人 {} (ID: {})，已注入身份信息", sender.name, sender.id);
        } else {
            debug!(sender_id = %sender.id, "WhoIsMyMaster: 识别到普通用户 {} (ID: {})，已注入身份信息", sender.name, sender.id);
        }

        request.append_system_prompt(&identity.annotation());
        debug!("WhoIsMyMaster: 已将身份信息注入到系统提示词中");

        Outcome::Applied(identity)
    }

    /// Tag the event with the sender's master flag
    pub fn on_message(&self, event: &dyn MessageEvent) -> Outcome<bool> {
        let result = event.sender_id().and_then(|sender_id| {
            let is_master = self.is_master(&sender_id);
            self.tags.set(event.event_id(), is_master)?;
            Ok(is_master)
        });

        if let Err(e) = &result {
            error!(event_id = %event.event_id(), error = %e, "WhoIsMyMaster: 处理消息时发生错误: {}", e);
        }
        result.into()
    }

    /// Build the `whoami` reply text
    pub fn whoami(&self, event: &dyn MessageEvent) -> Outcome<String> {
        match self.classify(event) {
            Ok(identity) => Outcome::Applied(identity.whoami_reply()),
            Err(e) => {
                error!(event_id = %event.event_id(), error = %e, "WhoIsMyMaster: whoami指令执行失败: {}", e);
                Outcome::Failed(e)
            }
        }
    }

    pub fn terminate(&self) {
        info!("WhoIsMyMaster: 插件已卸载");
    }
}

impl Default for IdentityAnnotator {
    fn default() -> Self {
        Self::new()
    }
}
