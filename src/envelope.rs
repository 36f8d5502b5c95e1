//! The uniform response envelope and paged payload shapes.
//!
//! Every non-binary backend response is wrapped as
//! `{ "code": <int>, "message": <string>, "data": <payload> }`. The
//! envelope `code` equals the configured success sentinel iff the business
//! operation succeeded; the HTTP status only reflects transport-level
//! outcome.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, ErrorContext, Result};

/// Wire-level envelope. Decoded with an opaque payload first so business
/// failures can be classified before the payload shape is enforced.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: String,
    pub data: T,
}

impl Envelope<Value> {
    /// Decode the raw body into an envelope with an opaque payload.
    pub(crate) fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| {
            Error::decode_with_context(
                "response is not a valid envelope",
                ErrorContext::new().with_details(preview(body)),
                Some(e),
            )
        })
    }

    /// Unwrap the payload, enforcing the success sentinel first.
    pub(crate) fn unwrap_data<T: DeserializeOwned>(self, success_code: i64) -> Result<T> {
        if self.code != success_code {
            return Err(Error::business(self.code, self.message));
        }
        serde_json::from_value(self.data).map_err(|e| {
            Error::decode_with_context(
                "envelope data does not match the expected shape",
                ErrorContext::new().with_field_path("data"),
                Some(e),
            )
        })
    }

    /// Best-effort extraction of a human-readable message, used to enrich
    /// non-2xx errors when the backend still returned an envelope body.
    pub(crate) fn message_from_body(body: &[u8]) -> Option<String> {
        let value: Value = serde_json::from_slice(body).ok()?;
        value
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
    }
}

fn preview(body: &[u8]) -> String {
    const MAX_CHARS: usize = 120;
    let text = String::from_utf8_lossy(body);
    let mut out: String = text.chars().take(MAX_CHARS).collect();
    if text.chars().count() > MAX_CHARS {
        out.push('…');
    }
    out
}

/// Paged list payload.
///
/// The backend emits two shapes for list endpoints, `{records, total}` and
/// `{data, total}`. Both decode into this one type; callers use the
/// accessors and never branch on the wire shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PageData<T> {
    Records { records: Vec<T>, total: u64 },
    Rows { data: Vec<T>, total: u64 },
}

impl<T> PageData<T> {
    pub fn items(&self) -> &[T] {
        match self {
            PageData::Records { records, .. } => records,
            PageData::Rows { data, .. } => data,
        }
    }

    pub fn into_items(self) -> Vec<T> {
        match self {
            PageData::Records { records, .. } => records,
            PageData::Rows { data, .. } => data,
        }
    }

    pub fn total(&self) -> u64 {
        match self {
            PageData::Records { total, .. } | PageData::Rows { total, .. } => *total,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success_unwraps_payload() {
        let env = Envelope::from_slice(br#"{"code":200,"message":"ok","data":{"id":7}}"#).unwrap();
        #[derive(Debug, Deserialize)]
        struct Row {
            id: i64,
        }
        let row: Row = env.unwrap_data(200).unwrap();
        assert_eq!(row.id, 7);
    }

    #[test]
    fn test_envelope_business_failure() {
        let env =
            Envelope::from_slice(br#"{"code":400,"message":"bad request","data":null}"#).unwrap();
        let err = env.unwrap_data::<Value>(200).unwrap_err();
        match err {
            Error::Business { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "bad request");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_envelope_shape_mismatch_is_decode_error() {
        let env = Envelope::from_slice(br#"{"code":200,"message":"ok","data":"oops"}"#).unwrap();
        #[derive(Debug, Deserialize)]
        struct Row {
            #[allow(dead_code)]
            id: i64,
        }
        let err = env.unwrap_data::<Row>(200).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_non_envelope_body_is_decode_error() {
        let err = Envelope::from_slice(b"<html>502</html>").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn test_null_data_unwraps_to_null() {
        let env = Envelope::from_slice(br#"{"code":200,"message":"ok","data":null}"#).unwrap();
        let data: Value = env.unwrap_data(200).unwrap();
        assert!(data.is_null());
    }

    #[test]
    fn test_custom_success_sentinel() {
        let env = Envelope::from_slice(br#"{"code":0,"message":"ok","data":true}"#).unwrap();
        let flag: bool = env.unwrap_data(0).unwrap();
        assert!(flag);
    }

    #[test]
    fn test_message_extraction_from_error_body() {
        let msg = Envelope::message_from_body(br#"{"code":500,"message":"boom","data":null}"#);
        assert_eq!(msg.as_deref(), Some("boom"));
        assert!(Envelope::message_from_body(b"not json").is_none());
        assert!(Envelope::message_from_body(br#"{"message":""}"#).is_none());
    }

    #[test]
    fn test_page_data_records_shape() {
        let page: PageData<Value> =
            serde_json::from_str(r#"{"records":[{"id":1},{"id":2}],"total":9}"#).unwrap();
        assert_eq!(page.items().len(), 2);
        assert_eq!(page.total(), 9);
    }

    #[test]
    fn test_page_data_rows_shape() {
        let page: PageData<Value> =
            serde_json::from_str(r#"{"data":[{"id":1}],"total":1}"#).unwrap();
        assert_eq!(page.items().len(), 1);
        assert_eq!(page.total(), 1);
        assert!(!page.is_empty());
    }
}
