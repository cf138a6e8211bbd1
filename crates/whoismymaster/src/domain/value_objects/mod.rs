//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod identity;
mod master_ids;
mod role;

pub use identity::*;
pub use master_ids::*;
pub use role::*;
