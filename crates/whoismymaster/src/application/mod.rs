//! Application Layer
//!
//! Applies the domain rules at the host's integration points.

mod annotator;
mod identity_tags;
mod outcome;
mod plugin;

pub use annotator::IdentityAnnotator;
pub use identity_tags::{IdentityTags, DEFAULT_TAG_CAPACITY};
pub use outcome::Outcome;
pub use plugin::{command_keyword, WhoIsMyMaster, WHOAMI_COMMAND, WHOAMI_FAILURE_REPLY};
