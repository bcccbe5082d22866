//! Payment provider port.
//!
//! The provider is consumed as two traits: a factory that binds credentials to a new
//! session, and the session itself. Sessions advertise the status-check operations
//! they support by name, so the application can probe for whichever one a given
//! client version exposes.

use crate::domain::{Credentials, PaymentAmount, RawProviderResponse};
use crate::error::ProviderError;

/// Status-check operation name exposed by current provider clients.
pub const VERSIONED_STATUS_OPERATION: &str = "cekPaymentV1";

/// Status-check operation names exposed by older provider clients, in probe order.
pub const LEGACY_STATUS_OPERATIONS: [&str; 2] = ["cekpayment", "cekPayment"];

/// Factory for provider sessions.
pub trait SaweriaProvider: Send + Sync + 'static {
    type Session: SaweriaSession;

    /// Creates a session bound to `credentials`. No network IO happens here.
    fn session(&self, credentials: Credentials) -> Self::Session;
}

/// One authenticated conversation with the provider.
///
/// Sessions are request-scoped and never shared between requests.
#[async_trait::async_trait]
pub trait SaweriaSession: Send + Sync {
    /// Performs the login handshake.
    async fn login(&mut self) -> Result<(), ProviderError>;

    /// Creates a QR payment for `amount` that expires after `duration_minutes`.
    async fn create_payment_qr(
        &self,
        amount: PaymentAmount,
        duration_minutes: u32,
    ) -> Result<RawProviderResponse, ProviderError>;

    /// Names of the status-check operations this session can run.
    fn operations(&self) -> Vec<String>;

    /// Whether `operation` is one of [`SaweriaSession::operations`].
    fn supports(&self, operation: &str) -> bool {
        self.operations().iter().any(|name| name == operation)
    }

    /// Runs the named status-check operation for `trx_id`.
    async fn check_payment(
        &self,
        operation: &str,
        trx_id: &str,
    ) -> Result<RawProviderResponse, ProviderError>;
}
