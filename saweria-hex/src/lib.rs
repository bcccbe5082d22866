//! # Saweria Hex
//!
//! Application service layer and HTTP adapter for the Saweria gateway.
//!
//! ## Architecture
//!
//! - `service/` - Application service (validation, login, provider calls, mapping)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `logger/` - `tracing`-backed implementation of the `EventLogger` port
//!
//! The service is generic over `P: SaweriaProvider`, allowing
//! different provider clients to be injected.

pub mod inbound;
pub mod logger;
pub mod openapi;
pub mod service;


pub use logger::TracingLogger;
pub use service::SaweriaService;
