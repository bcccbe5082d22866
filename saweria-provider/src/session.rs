//! Logged-in conversation with the Saweria backend.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeDelta, Utc};
use reqwest::{Client, Response, StatusCode, Url, header::AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use saweria_types::{
    Credentials, PaymentAmount, ProviderError, RawProviderResponse, SaweriaSession,
};

use crate::types::{
    CustomerInfo, DonationRequest, LoginRequest, error_message, translate_transaction_status,
    unwrap_data,
};

/// The single status-check operation this client exposes.
pub const CHECK_OPERATION: &str = "cekPaymentV1";

struct Auth {
    token: SecretString,
    user_id: String,
    username: String,
}

/// Session against the Saweria backend, bound to one set of credentials.
pub struct BackendSession {
    http: Client,
    base_url: Arc<Url>,
    credentials: Credentials,
    auth: Option<Auth>,
}

impl BackendSession {
    pub(crate) fn new(http: Client, base_url: Arc<Url>, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            auth: None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.auth.is_some()
    }

    fn auth(&self) -> Result<&Auth, ProviderError> {
        self.auth.as_ref().ok_or(ProviderError::NotLoggedIn)
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = (*self.base_url).clone();
        url.path_segments_mut()
            .map_err(|_| {
                ProviderError::Transport(format!("base URL cannot carry a path: {}", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_profile(&self, token: &SecretString) -> Result<Value, ProviderError> {
        let response = self
            .http
            .get(self.endpoint(&["users"])?)
            .header(AUTHORIZATION, token.expose_secret().as_str())
            .send()
            .await
            .map_err(transport)?;

        read_data(response).await
    }

    async fn query_status(&self, trx_id: &str) -> Result<RawProviderResponse, ProviderError> {
        let auth = self.auth()?;
        // Dot segments would be dropped from the path instead of escaped.
        if trx_id.is_empty() || trx_id == "." || trx_id == ".." {
            return Err(ProviderError::InvalidTransactionId(trx_id.to_string()));
        }
        let url = self.endpoint(&["donations", "qris", "snap", trx_id])?;
        tracing::debug!(%url, "Saweria status request");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, auth.token.expose_secret().as_str())
            .send()
            .await
            .map_err(transport)?;

        let mut raw = RawProviderResponse::new(read_data(response).await?);
        let translated = raw
            .get("transaction_status")
            .and_then(Value::as_str)
            .map(translate_transaction_status);
        if let Some(status) = translated {
            raw.fill("status", Value::from(status));
        }
        raw.fill("username", Value::from(auth.username.clone()));
        Ok(raw)
    }
}

#[async_trait]
impl SaweriaSession for BackendSession {
    #[tracing::instrument(skip(self), fields(username = %self.credentials.username()))]
    async fn login(&mut self) -> Result<(), ProviderError> {
        let request = LoginRequest {
            email: self.credentials.email(),
            password: self.credentials.password(),
        };

        let response = self
            .http
            .post(self.endpoint(&["auth", "login"])?)
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Unauthorized(error_message(&body)));
        }

        let header_token = response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let data = read_data(response).await?;

        let token = header_token
            .or_else(|| data.get("token").and_then(Value::as_str).map(String::from))
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ProviderError::Unauthorized("login response carried no token".into()))?;
        let token = SecretString::new(token);

        let profile = if data.get("id").is_some() {
            data
        } else {
            self.fetch_profile(&token).await?
        };

        let user_id = profile
            .get("id")
            .map(|id| match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .filter(|id| !id.is_empty())
            .ok_or_else(|| ProviderError::InvalidResponse("profile has no user id".into()))?;
        let username = profile
            .get("username")
            .and_then(Value::as_str)
            .unwrap_or(self.credentials.username())
            .to_string();

        tracing::debug!(%user_id, "Saweria login succeeded");
        self.auth = Some(Auth {
            token,
            user_id,
            username,
        });
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(amount = %amount))]
    async fn create_payment_qr(
        &self,
        amount: PaymentAmount,
        duration_minutes: u32,
    ) -> Result<RawProviderResponse, ProviderError> {
        let auth = self.auth()?;
        let request = DonationRequest {
            agree: true,
            not_underage: true,
            message: "",
            amount: amount.value(),
            payment_type: "qris",
            vote: "",
            currency: "IDR",
            customer_info: CustomerInfo {
                first_name: &auth.username,
                email: self.credentials.email(),
                phone: "",
            },
        };
        let url = self.endpoint(&["donations", "snap", auth.user_id.as_str()])?;
        tracing::debug!(%url, "Saweria create request");

        let created_at = Utc::now();
        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, auth.token.expose_secret().as_str())
            .json(&request)
            .send()
            .await
            .map_err(transport)?;

        let mut raw = RawProviderResponse::new(read_data(response).await?);
        let expires_at = created_at + TimeDelta::minutes(i64::from(duration_minutes));
        raw.fill("author", Value::from(auth.username.clone()));
        raw.fill("saweria_username", Value::from(auth.username.clone()));
        raw.fill("created_at", Value::from(created_at.to_rfc3339()));
        raw.fill("expired_in", Value::from(expires_at.to_rfc3339()));
        Ok(raw)
    }

    fn operations(&self) -> Vec<String> {
        vec![CHECK_OPERATION.to_string()]
    }

    async fn check_payment(
        &self,
        operation: &str,
        trx_id: &str,
    ) -> Result<RawProviderResponse, ProviderError> {
        match operation {
            CHECK_OPERATION => self.query_status(trx_id).await,
            other => Err(ProviderError::UnsupportedOperation(other.to_string())),
        }
    }
}

fn transport(err: reqwest::Error) -> ProviderError {
    ProviderError::Transport(err.to_string())
}

/// Reads a JSON response, unwrapping the `data` envelope.
async fn read_data(response: Response) -> Result<Value, ProviderError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;

    if !status.is_success() {
        return Err(ProviderError::Api {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str::<Value>(&body)
        .map(unwrap_data)
        .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
}
