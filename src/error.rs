use thiserror::Error;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.base_url", "data.records[0].id")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "dispatcher", "builder")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Classified error type for the admin API client.
///
/// Every dispatch resolves to exactly one of four outcome kinds
/// (`Transport`, `HttpStatus`, `Business`, `Decode`); `Configuration`
/// covers builder and request-construction misuse and is never produced
/// by a well-formed dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// No HTTP response was obtained (connection refused, timeout, DNS).
    #[error("transport error: {message}{}", format_context(.context))]
    Transport {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// A response was obtained but its status is outside the 2xx range.
    #[error("HTTP {status} ({class}): {message}")]
    HttpStatus {
        status: u16,
        /// Stable classification label, see [`crate::client::classify`].
        class: &'static str,
        message: String,
    },

    /// HTTP 2xx, but the envelope `code` was not the success sentinel.
    #[error("business error (code {code}): {message}")]
    Business { code: i64, message: String },

    /// Response body did not match the expected envelope or payload shape.
    #[error("decode error: {message}{}", format_context(.context))]
    Decode {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Invalid client configuration or request construction.
    #[error("configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn transport(msg: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            message: msg.into(),
            context: ErrorContext::new(),
            source: Some(source),
        }
    }

    pub fn transport_with_context(
        msg: impl Into<String>,
        context: ErrorContext,
        source: Option<reqwest::Error>,
    ) -> Self {
        Error::Transport {
            message: msg.into(),
            context,
            source,
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Error::HttpStatus {
            status,
            class: crate::client::classify::class_for_status(status),
            message: message.into(),
        }
    }

    pub fn business(code: i64, message: impl Into<String>) -> Self {
        Error::Business {
            code,
            message: message.into(),
        }
    }

    pub fn decode(msg: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Error::Decode {
            message: msg.into(),
            context: ErrorContext::new(),
            source,
        }
    }

    pub fn decode_with_context(
        msg: impl Into<String>,
        context: ErrorContext,
        source: Option<serde_json::Error>,
    ) -> Self {
        Error::Decode {
            message: msg.into(),
            context,
            source,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Transport { context, .. }
            | Error::Decode { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// HTTP status carried by this error, when a response was obtained.
    pub fn http_status_code(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_rendering() {
        let err = Error::configuration_with_context(
            "base URL must be absolute",
            ErrorContext::new()
                .with_field_path("config.base_url")
                .with_source("builder"),
        );
        let rendered = err.to_string();
        assert!(rendered.contains("base URL must be absolute"));
        assert!(rendered.contains("field: config.base_url"));
        assert!(rendered.contains("source: builder"));
    }

    #[test]
    fn test_http_status_carries_class() {
        let err = Error::http_status(429, "slow down");
        match &err {
            Error::HttpStatus { status, class, .. } => {
                assert_eq!(*status, 429);
                assert_eq!(*class, "rate_limited");
            }
            other => panic!("unexpected variant: {:?}", other),
        }
        assert_eq!(err.http_status_code(), Some(429));
    }

    #[test]
    fn test_business_display() {
        let err = Error::business(4001, "bad request");
        assert_eq!(err.to_string(), "business error (code 4001): bad request");
        assert!(err.context().is_none());
    }
}
