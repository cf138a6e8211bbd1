//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the plugin talks to its host
//! runtime: where configuration comes from, what an inbound event looks
//! like, and which lifecycle and hook callbacks the host drives.
//!
//! Host adapters (e.g. whoismymaster-integration-discord) live in separate
//! crates.

pub mod config;
pub mod event;
pub mod star;

// Re-exports
pub use config::*;
pub use event::*;
pub use star::*;
