//! Domain models for the Saweria gateway.

pub mod amount;
pub mod check;
pub mod create;
pub mod credentials;
pub mod normalize;
pub mod raw;
pub mod status;

pub use amount::PaymentAmount;
pub use check::{NormalizedStatusResult, map_status};
pub use create::{NormalizedCreateResult, map_create};
pub use credentials::Credentials;
pub use raw::RawProviderResponse;
pub use status::PaymentStatus;

/// Lifetime of every QR payment created through the gateway, in minutes.
pub const PAYMENT_DURATION_MINUTES: u32 = 10;
