//! Client configuration.
//!
//! Configuration is explicitly constructed and passed to the builder, so
//! multiple independently configured clients can coexist (e.g. one per
//! backend, or one pointed at a mock server in tests).

use std::collections::HashMap;
use std::env;
use std::time::Duration;

use url::Url;

use crate::{Error, ErrorContext, Result};

/// Envelope `code` value that marks a successful business operation.
///
/// The backend contract fixes this constant; it is configuration here,
/// never hardcoded at call sites.
pub const DEFAULT_SUCCESS_CODE: i64 = 200;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static configuration for an [`crate::ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL all request paths are joined onto.
    pub base_url: Url,
    /// Per-request timeout applied by the underlying HTTP client.
    pub timeout: Duration,
    /// Headers attached to every request. Request-level headers win.
    pub default_headers: HashMap<String, String>,
    /// Optional bearer token sent as `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,
    /// Envelope `code` value that means "business operation succeeded".
    pub success_code: i64,
}

impl ClientConfig {
    /// Build a configuration for the given base URL with defaults.
    ///
    /// The timeout default is env-overridable via `ADMIN_API_TIMEOUT_SECS`.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let base_url = Url::parse(base_url.as_ref()).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("config.base_url")
                    .with_details(base_url.as_ref().to_string()),
            )
        })?;
        if base_url.cannot_be_a_base() {
            return Err(Error::configuration_with_context(
                "base URL must be an absolute http(s) URL",
                ErrorContext::new().with_field_path("config.base_url"),
            ));
        }

        let timeout_secs = env::var("ADMIN_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            default_headers: HashMap::new(),
            bearer_token: None,
            success_code: DEFAULT_SUCCESS_CODE,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn with_success_code(mut self, code: i64) -> Self {
        self.success_code = code;
        self
    }

    /// Join a request path onto the base URL.
    ///
    /// Paths are treated as relative to the base regardless of a leading
    /// slash, so a base of `https://host/admin/` keeps its prefix.
    pub(crate) fn join(&self, path: &str) -> Result<Url> {
        let trimmed = path.trim_start_matches('/');
        self.base_url.join(trimmed).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid request path: {}", e),
                ErrorContext::new()
                    .with_field_path("request.path")
                    .with_details(path.to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::new("http://localhost:8080").unwrap();
        assert_eq!(config.success_code, DEFAULT_SUCCESS_CODE);
        assert!(config.bearer_token.is_none());
        assert!(config.default_headers.is_empty());
    }

    #[test]
    fn test_rejects_relative_base_url() {
        let err = ClientConfig::new("/api/admin").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_rejects_non_base_url() {
        let err = ClientConfig::new("mailto:ops@example.com").unwrap_err();
        assert!(matches!(err, Error::Configuration { .. }));
    }

    #[test]
    fn test_join_keeps_base_prefix() {
        let config = ClientConfig::new("http://localhost:8080/admin/").unwrap();
        let url = config.join("/api/admin/user/get/page").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/admin/api/admin/user/get/page"
        );
    }

    #[test]
    fn test_builder_style_setters() {
        let config = ClientConfig::new("http://localhost:8080")
            .unwrap()
            .with_timeout(Duration::from_secs(5))
            .with_default_header("x-request-source", "console")
            .with_bearer_token("t0ken")
            .with_success_code(0);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.default_headers.get("x-request-source").map(String::as_str),
            Some("console")
        );
        assert_eq!(config.bearer_token.as_deref(), Some("t0ken"));
        assert_eq!(config.success_code, 0);
    }
}
