//! The typed request dispatcher.

use std::time::Instant;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::client::builder::ApiClientBuilder;
use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::request::{Method, RequestBody, RequestSpec, ResponseKind};
use crate::{Error, ErrorContext, Result};

/// Client for the admin console backend.
///
/// Holds one pooled HTTP client plus static configuration; individual
/// calls are stateless and may be issued concurrently without
/// coordination. Cloning is cheap enough for sharing across tasks, and
/// dropping an in-flight future aborts the underlying call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::new()
    }

    /// Create a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                Error::configuration(format!("failed to create HTTP client: {}", e))
            })?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Perform a request and decode the enveloped JSON payload as `T`.
    ///
    /// Outcome classification is exhaustive:
    /// - no response obtained → [`Error::Transport`]
    /// - non-2xx status → [`Error::HttpStatus`] (body still scanned for a message)
    /// - 2xx but envelope `code` ≠ success sentinel → [`Error::Business`]
    /// - 2xx, sentinel ok, but `data` not a `T` → [`Error::Decode`]
    ///
    /// Exactly one network attempt per invocation. No retries, no caching.
    pub async fn dispatch<T: DeserializeOwned>(&self, spec: RequestSpec) -> Result<T> {
        if spec.response_kind() == ResponseKind::Binary {
            return Err(Error::configuration_with_context(
                "binary request specs must go through dispatch_binary",
                ErrorContext::new().with_field_path("request.response_kind"),
            ));
        }
        let (status, body) = self.send(&spec).await?;
        if !status.is_success() {
            return Err(self.status_error(&spec, status, &body));
        }
        let envelope = Envelope::from_slice(&body)?;
        envelope.unwrap_data(self.config.success_code)
    }

    /// Perform a request and return the raw response bytes.
    ///
    /// Envelope decoding is skipped entirely, even if the payload happens
    /// to be valid JSON text. Transport and HTTP-status classification
    /// are identical to [`Self::dispatch`].
    pub async fn dispatch_binary(&self, spec: RequestSpec) -> Result<Bytes> {
        let (status, body) = self.send(&spec).await?;
        if !status.is_success() {
            return Err(self.status_error(&spec, status, &body));
        }
        Ok(body)
    }

    fn status_error(&self, spec: &RequestSpec, status: StatusCode, body: &[u8]) -> Error {
        let message = Envelope::message_from_body(body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("unrecognized status")
                .to_string()
        });
        warn!(
            method = %spec.method(),
            path = spec.path(),
            status = status.as_u16(),
            "backend returned error status"
        );
        Error::http_status(status.as_u16(), message)
    }

    /// Single network attempt: build the request, send it, read the body.
    async fn send(&self, spec: &RequestSpec) -> Result<(StatusCode, Bytes)> {
        if spec.path().is_empty() {
            return Err(Error::configuration_with_context(
                "request path must not be empty",
                ErrorContext::new().with_field_path("request.path"),
            ));
        }
        let url = self.config.join(spec.path())?;

        let mut request = match spec.method() {
            Method::Get => self.http.get(url.clone()),
            Method::Post => self.http.post(url.clone()),
            Method::Put => self.http.put(url.clone()),
            Method::Delete => self.http.delete(url.clone()),
        };

        for (name, value) in &self.config.default_headers {
            let overridden = spec
                .headers
                .keys()
                .any(|k| k.eq_ignore_ascii_case(name));
            if !overridden {
                request = request.header(name, value);
            }
        }
        for (name, value) in &spec.headers {
            request = request.header(name, value);
        }
        if let Some(token) = &self.config.bearer_token {
            request = request.bearer_auth(token);
        }

        if !spec.query.is_empty() {
            let pairs: Vec<(&str, &str)> = spec
                .query
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            request = request.query(&pairs);
        }

        match &spec.body {
            Some(RequestBody::Json(value)) => request = request.json(value),
            Some(RequestBody::Form(fields)) => request = request.form(fields),
            None => {}
        }

        debug!(method = %spec.method(), path = spec.path(), "dispatching request");
        let started = Instant::now();

        let response = request.send().await.map_err(|e| {
            Error::transport_with_context(
                format!("request to {} failed: {}", url, e),
                ErrorContext::new().with_source("dispatcher"),
                Some(e),
            )
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            Error::transport_with_context(
                "failed to read response body",
                ErrorContext::new().with_source("dispatcher"),
                Some(e),
            )
        })?;

        info!(
            method = %spec.method(),
            path = spec.path(),
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request completed"
        );
        Ok((status, body))
    }
}
