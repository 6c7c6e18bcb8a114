/*
[INPUT]:  Raw HTTP status and body returned by the gateway
[OUTPUT]: Decoded JSON or raw HTTP error payloads
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When response handling or the envelope shape changes
*/

pub use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Outcome of a dispatched command
///
/// HTTP error statuses are not `Err`: the raw body is handed back as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Decoded body of a successful response
    Json(Value),
    /// Undecoded body of any non-2xx response
    HttpError { status: StatusCode, body: Vec<u8> },
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Json(_))
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::HttpError { .. } => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::HttpError { .. } => None,
        }
    }

    /// Raw error body, if this is an HTTP error
    pub fn error_body(&self) -> Option<&[u8]> {
        match self {
            ApiResponse::HttpError { body, .. } => Some(body),
            ApiResponse::Json(_) => None,
        }
    }

    /// Read the conventional `{"error": ..., "result": ...}` wrapper.
    ///
    /// Returns `None` for HTTP errors or bodies without that shape.
    pub fn envelope(&self) -> Option<ApiEnvelope> {
        self.as_json()
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Gateway response wrapper; `error` is `"ok"` on success
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiEnvelope {
    pub error: String,
    #[serde(default)]
    pub result: Value,
}

impl ApiEnvelope {
    pub fn is_ok(&self) -> bool {
        self.error == "ok"
    }
}
