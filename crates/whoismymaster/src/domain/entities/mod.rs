//! Domain Entities
//!
//! Per-event models handed over by the host runtime.
//! - Sender: who sent the message
//! - InboundMessage: one inbound chat message
//! - ProviderRequest: outbound LLM request being prepared

mod message;
mod provider_request;
mod sender;

pub use message::*;
pub use provider_request::*;
pub use sender::*;
