//! Common test utilities for HTTP integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use serde_json::{Value, json};

use saweria_hex::{SaweriaService, inbound::HttpServer};
use saweria_types::{
    Credentials, PaymentAmount, ProviderError, RawProviderResponse, SaweriaProvider,
    SaweriaSession,
};

/// How the fake provider should behave.
#[derive(Clone, Default)]
pub struct Script {
    pub login_error: Option<String>,
    pub create_error: Option<String>,
    pub panic_on_create: bool,
    pub operations: Vec<String>,
    pub response: Value,
}

/// Provider double driven by a [`Script`].
#[derive(Clone)]
pub struct FakeProvider {
    script: Script,
    invoked: Arc<Mutex<Vec<String>>>,
    amounts: Arc<Mutex<Vec<u64>>>,
}

impl FakeProvider {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            invoked: Arc::new(Mutex::new(Vec::new())),
            amounts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Names of every provider operation invoked so far.
    pub fn invoked(&self) -> Vec<String> {
        self.invoked.lock().unwrap().clone()
    }

    /// Amounts passed to `create_payment_qr` so far.
    pub fn created_amounts(&self) -> Vec<u64> {
        self.amounts.lock().unwrap().clone()
    }
}

pub struct FakeSession {
    script: Script,
    invoked: Arc<Mutex<Vec<String>>>,
    amounts: Arc<Mutex<Vec<u64>>>,
}

impl SaweriaProvider for FakeProvider {
    type Session = FakeSession;

    fn session(&self, _credentials: Credentials) -> FakeSession {
        FakeSession {
            script: self.script.clone(),
            invoked: self.invoked.clone(),
            amounts: self.amounts.clone(),
        }
    }
}

#[async_trait]
impl SaweriaSession for FakeSession {
    async fn login(&mut self) -> Result<(), ProviderError> {
        self.invoked.lock().unwrap().push("login".into());
        match &self.script.login_error {
            Some(message) => Err(ProviderError::Unauthorized(message.clone())),
            None => Ok(()),
        }
    }

    async fn create_payment_qr(
        &self,
        amount: PaymentAmount,
        _duration_minutes: u32,
    ) -> Result<RawProviderResponse, ProviderError> {
        self.invoked.lock().unwrap().push("createPaymentQr".into());
        self.amounts.lock().unwrap().push(amount.value());
        if self.script.panic_on_create {
            panic!("provider client blew up");
        }
        match &self.script.create_error {
            Some(message) => Err(ProviderError::Transport(message.clone())),
            None => Ok(RawProviderResponse::new(self.script.response.clone())),
        }
    }

    fn operations(&self) -> Vec<String> {
        self.script.operations.clone()
    }

    async fn check_payment(
        &self,
        operation: &str,
        _trx_id: &str,
    ) -> Result<RawProviderResponse, ProviderError> {
        self.invoked.lock().unwrap().push(operation.to_string());
        Ok(RawProviderResponse::new(self.script.response.clone()))
    }
}

/// A script for a provider that behaves like the current client.
pub fn happy_script() -> Script {
    Script {
        operations: vec!["cekPaymentV1".into()],
        response: json!({
            "id": "trx-001",
            "amount": 1000,
            "qr_string": "00020101021226",
            "status": "Pending",
            "created_at": "2024-05-01T10:00:00Z"
        }),
        ..Script::default()
    }
}

pub fn test_app(provider: FakeProvider) -> Router {
    HttpServer::new(SaweriaService::new(provider)).router()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub const CREDS: &str = "username=kedai_kopi&email=owner%40kedai.id&password=hunter2";
