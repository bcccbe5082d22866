//! # Saweria Client SDK
//!
//! A typed Rust client for the Saweria gateway API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use saweria_types::{
    CheckStatusQuery, CreatePaymentQuery, Credentials, NormalizedCreateResult,
    NormalizedStatusResult,
};

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api {
        status: u16,
        message: String,
        detail: Option<String>,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Saweria gateway API client.
pub struct SaweriaApiClient {
    base_url: String,
    http: Client,
}

impl SaweriaApiClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Creates a QR payment for `amount` on the account behind `credentials`.
    pub async fn create_payment(
        &self,
        credentials: &Credentials,
        amount: u64,
    ) -> Result<NormalizedCreateResult, ClientError> {
        let query = CreatePaymentQuery {
            username: Some(credentials.username().to_string()),
            email: Some(credentials.email().to_string()),
            password: Some(credentials.password().to_string()),
            amount: Some(amount.to_string()),
        };
        self.get("/saweria/create", &query).await
    }

    /// Checks the status of transaction `trx_id`.
    pub async fn check_status(
        &self,
        credentials: &Credentials,
        trx_id: &str,
    ) -> Result<NormalizedStatusResult, ClientError> {
        let query = CheckStatusQuery {
            username: Some(credentials.username().to_string()),
            email: Some(credentials.email().to_string()),
            password: Some(credentials.password().to_string()),
            trxid: Some(trx_id.to_string()),
        };
        self.get("/saweria/status", &query).await
    }

    async fn get<T: DeserializeOwned, Q: serde::Serialize>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(query)
            .send()
            .await?;
        self.handle_response(resp).await
    }

    /// Unwraps the `{status, data}` envelope.
    ///
    /// Validation failures arrive with HTTP 200 and `status: false`, so the envelope
    /// flag decides success rather than the status code.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status().as_u16();
        let body = resp.text().await?;

        let envelope = match serde_json::from_str::<Value>(&body) {
            Ok(value) => value,
            Err(_) => {
                return Err(ClientError::Api {
                    status,
                    message: body,
                    detail: None,
                });
            }
        };

        if envelope.get("status").and_then(Value::as_bool) == Some(true) {
            let data = envelope.get("data").cloned().unwrap_or(Value::Null);
            return Ok(serde_json::from_value(data)?);
        }

        let text = |key: &str| envelope.get(key).and_then(Value::as_str).map(String::from);
        Err(ClientError::Api {
            status,
            message: text("error").unwrap_or(body),
            detail: text("detail"),
        })
    }
}
