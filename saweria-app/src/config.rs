//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use saweria_provider::DEFAULT_BASE_URL;

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub saweria_base_url: String,
    pub saweria_timeout: Duration,
    pub otel_enabled: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`; unset or empty values take their defaults.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {e}"))?;

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let saweria_base_url = var("SAWERIA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = var("SAWERIA_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("SAWERIA_TIMEOUT_SECS must be a whole number: {e}"))?;

        let otel_enabled = var("OTEL_ENABLED")
            .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
            .unwrap_or(false);

        Ok(Self {
            host,
            port,
            saweria_base_url,
            saweria_timeout: Duration::from_secs(timeout_secs),
            otel_enabled,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.saweria_base_url, "https://backend-api.saweria.co");
        assert_eq!(config.saweria_timeout, Duration::from_secs(30));
        assert!(!config.otel_enabled);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("SAWERIA_BASE_URL", "http://localhost:9000"),
            ("SAWERIA_TIMEOUT_SECS", "5"),
            ("OTEL_ENABLED", "true"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.saweria_base_url, "http://localhost:9000");
        assert_eq!(config.saweria_timeout, Duration::from_secs(5));
        assert!(config.otel_enabled);
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[("PORT", ""), ("HOST", "  ")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_port() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(load(&[("SAWERIA_TIMEOUT_SECS", "-1")]).is_err());
    }
}
