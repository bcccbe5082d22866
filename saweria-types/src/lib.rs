//! # Saweria Types
//!
//! Domain types, response mappers and port traits for the Saweria QR payment gateway.
//! This crate has ZERO IO dependencies - only data structures, normalization rules,
//! and trait definitions.
//!
//! ## Architecture
//!
//! This crate is the **innermost core** of the hexagonal architecture:
//! - `domain/` - Credentials, amounts, raw provider payloads and the normalized results
//! - `ports/` - Trait definitions the provider adapter and loggers implement
//! - `dto/` - Query parameters and response envelopes for the HTTP boundary
//! - `error/` - Domain, provider and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Credentials, NormalizedCreateResult, NormalizedStatusResult, PAYMENT_DURATION_MINUTES,
    PaymentAmount, PaymentStatus, RawProviderResponse, map_create, map_status,
};
pub use dto::*;
pub use error::{AppError, DomainError, ProviderError};
pub use ports::{EventLogger, SaweriaProvider, SaweriaSession};
