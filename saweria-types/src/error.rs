//! Error types for the Saweria gateway.

/// Message returned when the create endpoint is missing a parameter.
pub const MISSING_CREATE_PARAMS: &str =
    "Parameter 'username', 'email', 'password', dan 'amount' wajib diisi!";
/// Message returned when the status endpoint is missing a parameter.
pub const MISSING_STATUS_PARAMS: &str =
    "Parameter 'username', 'email', 'password', dan 'trxid' wajib diisi!";
pub const INVALID_AMOUNT: &str = "Parameter 'amount' harus angka > 0";
pub const LOGIN_FAILED: &str = "Gagal login ke Saweria";
pub const CREATE_FAILED: &str = "Gagal membuat payment QR";
pub const STATUS_FAILED: &str = "Gagal memeriksa status transaksi";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Domain-level errors (input rule violations).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Username, email and password are required")]
    MissingCredentials,

    #[error("Amount is not a number: {0:?}")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero")]
    NonPositiveAmount,
}

/// Errors raised by the provider port.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Transport(String),

    #[error("Login rejected: {0}")]
    Unauthorized(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Session is not logged in")]
    NotLoggedIn,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error(
        "Saweria session does not expose a compatible status-check operation (cekPaymentV1/cekpayment/cekPayment)"
    )]
    NoStatusOperation,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid transaction id: {0:?}")]
    InvalidTransactionId(String),
}

/// Application-level errors.
///
/// Each variant maps to one response shape; see [`AppError::message`] and
/// [`AppError::detail`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Gagal login ke Saweria: {0}")]
    Authentication(String),

    #[error("{message}: {detail}")]
    Provider {
        message: &'static str,
        detail: String,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn login(err: ProviderError) -> Self {
        AppError::Authentication(err.to_string())
    }

    pub fn create(err: ProviderError) -> Self {
        AppError::Provider {
            message: CREATE_FAILED,
            detail: err.to_string(),
        }
    }

    pub fn status_check(err: ProviderError) -> Self {
        AppError::Provider {
            message: STATUS_FAILED,
            detail: err.to_string(),
        }
    }

    /// The `error` field of the response body.
    pub fn message(&self) -> &str {
        match self {
            AppError::Validation(msg) => msg,
            AppError::Authentication(_) => LOGIN_FAILED,
            AppError::Provider { message, .. } => message,
            AppError::Internal(_) => INTERNAL_ERROR,
        }
    }

    /// The `detail` field of the response body. Validation failures carry none.
    pub fn detail(&self) -> Option<&str> {
        match self {
            AppError::Validation(_) => None,
            AppError::Authentication(detail)
            | AppError::Provider { detail, .. }
            | AppError::Internal(detail) => Some(detail),
        }
    }
}
