//! Provider factory bound to one backend URL.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Url};
use saweria_types::{Credentials, ProviderError, SaweriaProvider};

use crate::session::BackendSession;

/// Production Saweria backend.
pub const DEFAULT_BASE_URL: &str = "https://backend-api.saweria.co";

/// Saweria backend provider.
#[derive(Debug, Clone)]
pub struct SaweriaBackend {
    http: Client,
    base_url: Arc<Url>,
}

impl SaweriaBackend {
    /// Creates a provider talking to `base_url` with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let base_url = base_url.into();
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| ProviderError::Transport(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ProviderError::Transport(format!(
                "base URL cannot carry a path: {base_url}"
            )));
        }

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }
}

impl SaweriaProvider for SaweriaBackend {
    type Session = BackendSession;

    fn session(&self, credentials: Credentials) -> BackendSession {
        BackendSession::new(self.http.clone(), self.base_url.clone(), credentials)
    }
}
