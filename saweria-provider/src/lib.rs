//! # Saweria Provider
//!
//! Outbound adapter for the Saweria backend API.
//! This crate provides the reqwest-based client that implements the
//! `SaweriaProvider` / `SaweriaSession` ports.

mod backend;
mod session;
mod types;

use std::time::Duration;

pub use backend::{DEFAULT_BASE_URL, SaweriaBackend};
pub use session::{BackendSession, CHECK_OPERATION};

/// Build a provider for the Saweria backend at `base_url`.
///
/// The returned provider owns a pooled HTTP client; sessions created from it share
/// connections but never share login state.
///
/// # Examples
///
/// ```ignore
/// let provider = build_provider("https://backend-api.saweria.co", Duration::from_secs(30))?;
/// ```
pub fn build_provider(base_url: &str, timeout: Duration) -> anyhow::Result<SaweriaBackend> {
    Ok(SaweriaBackend::new(base_url, timeout)?)
}
