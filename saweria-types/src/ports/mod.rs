//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod logger;
mod provider;

pub use logger::EventLogger;
pub use provider::{
    LEGACY_STATUS_OPERATIONS, SaweriaProvider, SaweriaSession, VERSIONED_STATUS_OPERATION,
};
