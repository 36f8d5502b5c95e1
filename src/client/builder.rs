use std::collections::HashMap;
use std::time::Duration;

use crate::client::core::ApiClient;
use crate::config::ClientConfig;
use crate::{Error, Result};

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable (developer-friendly).
pub struct ApiClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    default_headers: HashMap<String, String>,
    bearer_token: Option<String>,
    success_code: Option<i64>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            default_headers: HashMap::new(),
            bearer_token: None,
            success_code: None,
        }
    }

    /// Set the backend base URL (required).
    ///
    /// Point this at a mock server to test against a fake backend.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Attach a header to every request.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Send `Authorization: Bearer <token>` on every request.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Override the envelope success sentinel (default 200).
    pub fn success_code(mut self, code: i64) -> Self {
        self.success_code = Some(code);
        self
    }

    pub fn build(self) -> Result<ApiClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::configuration("base URL must be specified"))?;
        let mut config = ClientConfig::new(base_url)?;
        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }
        for (name, value) in self.default_headers {
            config = config.with_default_header(name, value);
        }
        if let Some(token) = self.bearer_token {
            config = config.with_bearer_token(token);
        }
        if let Some(code) = self.success_code {
            config = config.with_success_code(code);
        }
        ApiClient::new(config)
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_base_url() {
        let err = ApiClientBuilder::new().build().unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_build_rejects_bad_base_url() {
        let err = ApiClientBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_build_applies_overrides() {
        let client = ApiClientBuilder::new()
            .base_url("http://localhost:8080")
            .timeout(Duration::from_secs(3))
            .default_header("x-request-source", "console")
            .bearer_token("t0ken")
            .success_code(0)
            .build()
            .unwrap();
        let config = client.config();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.success_code, 0);
        assert_eq!(config.bearer_token.as_deref(), Some("t0ken"));
        assert_eq!(
            config.default_headers.get("x-request-source").map(String::as_str),
            Some("console")
        );
    }
}
