//! Data Transfer Objects (DTOs) for requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{NormalizedCreateResult, NormalizedStatusResult};

// ─────────────────────────────────────────────────────────────────────────────
// Query parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Query parameters of `GET /saweria/create`.
///
/// Every field is optional at the transport level; the service decides what is missing.
#[derive(Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreatePaymentQuery {
    /// Saweria username
    #[param(example = "kedai_kopi")]
    pub username: Option<String>,
    /// Saweria account email
    pub email: Option<String>,
    /// Saweria account password
    pub password: Option<String>,
    /// Nominal in rupiah, must be an integer greater than zero
    #[param(example = "10000")]
    pub amount: Option<String>,
}

impl CreatePaymentQuery {
    /// Builds the query from decoded `key=value` pairs. A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut query.username,
                "email" => &mut query.email,
                "password" => &mut query.password,
                "amount" => &mut query.amount,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Returns `(username, email, password, amount)` when all four are non-empty.
    pub fn required(&self) -> Option<(&str, &str, &str, &str)> {
        Some((
            non_empty(&self.username)?,
            non_empty(&self.email)?,
            non_empty(&self.password)?,
            non_empty(&self.amount)?,
        ))
    }
}

impl std::fmt::Debug for CreatePaymentQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreatePaymentQuery")
            .field("username", &self.username)
            .field("amount", &self.amount)
            .finish_non_exhaustive()
    }
}

/// Query parameters of `GET /saweria/status`.
#[derive(Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CheckStatusQuery {
    /// Saweria username
    pub username: Option<String>,
    /// Saweria account email
    pub email: Option<String>,
    /// Saweria account password
    pub password: Option<String>,
    /// Transaction id returned by the create endpoint
    pub trxid: Option<String>,
}

impl CheckStatusQuery {
    /// Builds the query from decoded `key=value` pairs. A repeated key keeps its first value.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "username" => &mut query.username,
                "email" => &mut query.email,
                "password" => &mut query.password,
                "trxid" => &mut query.trxid,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Returns `(username, email, password, trxid)` when all four are non-empty.
    pub fn required(&self) -> Option<(&str, &str, &str, &str)> {
        Some((
            non_empty(&self.username)?,
            non_empty(&self.email)?,
            non_empty(&self.password)?,
            non_empty(&self.trxid)?,
        ))
    }
}

impl std::fmt::Debug for CheckStatusQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckStatusQuery")
            .field("username", &self.username)
            .field("trxid", &self.trxid)
            .finish_non_exhaustive()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Response envelopes
// ─────────────────────────────────────────────────────────────────────────────

/// Successful response of `GET /saweria/create`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentResponse {
    /// Always `true`
    #[schema(example = true)]
    pub status: bool,
    pub data: NormalizedCreateResult,
}

impl CreatePaymentResponse {
    pub fn new(data: NormalizedCreateResult) -> Self {
        Self { status: true, data }
    }
}

/// Successful response of `GET /saweria/status`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckStatusResponse {
    /// Always `true`
    #[schema(example = true)]
    pub status: bool,
    pub data: NormalizedStatusResult,
}

impl CheckStatusResponse {
    pub fn new(data: NormalizedStatusResult) -> Self {
        Self { status: true, data }
    }
}

/// Failure body shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Always `false`
    #[schema(example = false)]
    pub status: bool,
    #[schema(example = "Gagal login ke Saweria")]
    pub error: String,
    /// Underlying cause, absent for validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            status: false,
            error: error.into(),
            detail,
        }
    }
}

impl From<&crate::AppError> for ErrorResponse {
    fn from(err: &crate::AppError) -> Self {
        Self::new(err.message(), err.detail().map(String::from))
    }
}
