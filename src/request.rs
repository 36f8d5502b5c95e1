//! Request descriptors consumed by the dispatcher.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::{Error, ErrorContext, Result};

/// HTTP methods the backend accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the response body is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseKind {
    /// Decode the body as the uniform JSON envelope.
    #[default]
    Json,
    /// Return the raw bytes; envelope decoding is skipped entirely.
    Binary,
}

/// Request body payload.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// JSON-serialized body (`application/json`).
    Json(Value),
    /// Form-encoded body (`application/x-www-form-urlencoded`).
    Form(Vec<(String, String)>),
}

/// Immutable description of a single backend request.
///
/// Built per call and consumed once by [`crate::ApiClient::dispatch`].
/// Query and body contents are passed through as-is; the typed endpoint
/// facades constrain parameter shapes at the call site.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub(crate) method: Method,
    pub(crate) path: String,
    pub(crate) query: HashMap<String, String>,
    pub(crate) body: Option<RequestBody>,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) response_kind: ResponseKind,
}

impl RequestSpec {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: HashMap::new(),
            body: None,
            headers: HashMap::new(),
            response_kind: ResponseKind::Json,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Add a query parameter. Duplicate keys: last write wins.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key.into(), value.to_string());
        self
    }

    /// Add a query parameter only when the value is present.
    pub fn query_opt(self, key: impl Into<String>, value: Option<impl ToString>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Attach a JSON body. Serialization failures surface at dispatch.
    pub fn json_body<B: Serialize>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(|e| {
            Error::configuration_with_context(
                format!("request body is not serializable: {}", e),
                ErrorContext::new().with_field_path("request.body"),
            )
        })?;
        self.body = Some(RequestBody::Json(value));
        Ok(self)
    }

    /// Attach a form-encoded body.
    pub fn form_body<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.body = Some(RequestBody::Form(fields));
        self
    }

    /// Set a request-level header, overriding any default header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Mark the response as an opaque byte payload.
    pub fn binary(mut self) -> Self {
        self.response_kind = ResponseKind::Binary;
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn response_kind(&self) -> ResponseKind {
        self.response_kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_query_keys_last_write_wins() {
        let spec = RequestSpec::get("/api/admin/posts/list")
            .query("pageNum", 1)
            .query("pageNum", 3);
        assert_eq!(spec.query.get("pageNum").map(String::as_str), Some("3"));
        assert_eq!(spec.query.len(), 1);
    }

    #[test]
    fn test_query_opt_skips_none() {
        let spec = RequestSpec::get("/api/admin/posts/list")
            .query_opt("keyword", None::<&str>)
            .query_opt("days", Some(7));
        assert!(!spec.query.contains_key("keyword"));
        assert_eq!(spec.query.get("days").map(String::as_str), Some("7"));
    }

    #[test]
    fn test_json_body_serializes() {
        #[derive(serde::Serialize)]
        struct Payload {
            ids: Vec<i64>,
        }
        let spec = RequestSpec::post("/api/admin/posts/batch/pin")
            .json_body(&Payload { ids: vec![1, 2] })
            .unwrap();
        match spec.body {
            Some(RequestBody::Json(v)) => assert_eq!(v["ids"][1], 2),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_binary_marker() {
        let spec = RequestSpec::get("/api/admin/user/export/csv").binary();
        assert_eq!(spec.response_kind(), ResponseKind::Binary);
    }

    #[test]
    fn test_default_response_kind_is_json() {
        let spec = RequestSpec::delete("/api/admin/user/delete/9");
        assert_eq!(spec.response_kind(), ResponseKind::Json);
        assert_eq!(spec.method(), Method::Delete);
    }
}
