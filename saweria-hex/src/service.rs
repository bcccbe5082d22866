//! Saweria Application Service
//!
//! Orchestrates validation, login and provider calls through the provider port.
//! Contains NO transport logic - handlers only translate its results to HTTP.

use std::sync::Arc;

use saweria_types::error::{INVALID_AMOUNT, MISSING_CREATE_PARAMS, MISSING_STATUS_PARAMS};
use saweria_types::ports::{LEGACY_STATUS_OPERATIONS, VERSIONED_STATUS_OPERATION};
use saweria_types::{
    AppError, CheckStatusQuery, CreatePaymentQuery, Credentials, EventLogger,
    NormalizedCreateResult, NormalizedStatusResult, PAYMENT_DURATION_MINUTES, PaymentAmount,
    ProviderError, RawProviderResponse, SaweriaProvider, SaweriaSession, map_create, map_status,
};

use crate::TracingLogger;

/// Application service for the Saweria gateway.
///
/// Generic over `P: SaweriaProvider` - the provider client is injected at compile time.
/// Every request builds and logs in its own session; nothing is cached between calls.
pub struct SaweriaService<P: SaweriaProvider> {
    provider: P,
    logger: Arc<dyn EventLogger>,
}

impl<P: SaweriaProvider> SaweriaService<P> {
    /// Creates a service that logs through `tracing`.
    pub fn new(provider: P) -> Self {
        Self::with_logger(provider, Arc::new(TracingLogger))
    }

    /// Creates a service with a custom event logger.
    pub fn with_logger(provider: P, logger: Arc<dyn EventLogger>) -> Self {
        Self { provider, logger }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────────

    /// Builds a session for `credentials` and logs in once.
    pub async fn init_session(&self, credentials: Credentials) -> Result<P::Session, AppError> {
        let username = credentials.username().to_string();
        let mut session = self.provider.session(credentials);

        self.logger.info(&format!("Attempting login for {}", username));
        session.login().await.map_err(AppError::login)?;
        self.logger.info(&format!("Login OK for {}", username));

        Ok(session)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Payments
    // ─────────────────────────────────────────────────────────────────────────────

    /// Creates a QR payment that expires after [`PAYMENT_DURATION_MINUTES`].
    pub async fn create_payment(
        &self,
        query: &CreatePaymentQuery,
    ) -> Result<NormalizedCreateResult, AppError> {
        let (username, email, password, amount) = query
            .required()
            .ok_or_else(|| AppError::Validation(MISSING_CREATE_PARAMS.into()))?;

        let amount = PaymentAmount::parse(amount)
            .map_err(|_| AppError::Validation(INVALID_AMOUNT.into()))?;
        let credentials = Credentials::new(username, email, password)
            .map_err(|_| AppError::Validation(MISSING_CREATE_PARAMS.into()))?;

        let session = self
            .init_session(credentials)
            .await
            .inspect_err(|e| self.log_failure("create", "login failed", e))?;

        self.logger.info(&format!(
            "create: creating payment for {} amount={} duration={}m",
            username, amount, PAYMENT_DURATION_MINUTES
        ));
        let raw = session
            .create_payment_qr(amount, PAYMENT_DURATION_MINUTES)
            .await
            .map_err(AppError::create)
            .inspect_err(|e| self.log_failure("create", "create_payment_qr error", e))?;

        self.logger.info(&format!(
            "create: provider answered for trx {}",
            transaction_ref(&raw)
        ));
        Ok(map_create(raw))
    }

    /// Looks up the status of an existing transaction.
    pub async fn check_status(
        &self,
        query: &CheckStatusQuery,
    ) -> Result<NormalizedStatusResult, AppError> {
        let (username, email, password, trx_id) = query
            .required()
            .ok_or_else(|| AppError::Validation(MISSING_STATUS_PARAMS.into()))?;
        let credentials = Credentials::new(username, email, password)
            .map_err(|_| AppError::Validation(MISSING_STATUS_PARAMS.into()))?;

        let session = self
            .init_session(credentials)
            .await
            .inspect_err(|e| self.log_failure("status", "login failed", e))?;

        let raw = self
            .run_status_check(&session, trx_id)
            .await
            .map_err(AppError::status_check)
            .inspect_err(|e| self.log_failure("status", "status check error", e))?;

        Ok(map_status(raw))
    }

    async fn run_status_check(
        &self,
        session: &P::Session,
        trx_id: &str,
    ) -> Result<RawProviderResponse, ProviderError> {
        let operation =
            resolve_status_operation(session).ok_or(ProviderError::NoStatusOperation)?;
        self.logger
            .info(&format!("status: checking trx {} via {}", trx_id, operation));
        session.check_payment(&operation, trx_id).await
    }

    fn log_failure(&self, stage: &str, what: &str, err: &AppError) {
        let detail = err.detail().unwrap_or_else(|| err.message());
        self.logger.error(&format!("{}: {}: {}", stage, what, detail));
    }
}

/// Picks the status-check operation a session should run.
///
/// Known names are probed in order: the versioned name, then the legacy spellings.
/// As a last resort the first advertised operation whose name contains `check` (or the
/// provider's own `cek`), ignoring case, is used.
pub fn resolve_status_operation<S: SaweriaSession + ?Sized>(session: &S) -> Option<String> {
    std::iter::once(VERSIONED_STATUS_OPERATION)
        .chain(LEGACY_STATUS_OPERATIONS)
        .find(|name| session.supports(name))
        .map(String::from)
        .or_else(|| {
            session.operations().into_iter().find(|name| {
                let name = name.to_lowercase();
                name.contains("check") || name.contains("cek")
            })
        })
}

fn transaction_ref(raw: &RawProviderResponse) -> String {
    match raw.first_truthy(&["trx_id", "id"]) {
        Some(_) => raw.text(&["trx_id", "id"]),
        None => "<unknown>".to_string(),
    }
}
