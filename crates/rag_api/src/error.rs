use std::fmt;

pub use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Error as JsonError;
use serde_json::Value;

#[derive(Debug)]
pub enum RagApiError {
    EmptyUpload,
    EmptySessionId,
    InvalidBaseUrl(String),
    InvalidDocumentPart(String),
    Request(reqwest::Error),
    Status(StatusCode, String),
    Serde(JsonError),
    Unknown(String),
}

/// FastAPI-style error body: `{"detail": ...}` where `detail` is usually a
/// string but may be structured for validation failures.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorPayload {
    pub detail: Option<Value>,
}

impl fmt::Display for RagApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUpload => write!(f, "at least one document is required"),
            Self::EmptySessionId => write!(f, "session id is required"),
            Self::InvalidBaseUrl(value) => write!(f, "invalid base URL: {value}"),
            Self::InvalidDocumentPart(message) => {
                write!(f, "invalid document part: {message}")
            }
            Self::Request(error) => write!(f, "request error: {error}"),
            Self::Status(status, message) => write!(f, "HTTP {status} {message}"),
            Self::Serde(error) => write!(f, "serialization error: {error}"),
            Self::Unknown(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for RagApiError {}

impl From<reqwest::Error> for RagApiError {
    fn from(error: reqwest::Error) -> Self {
        Self::Request(error)
    }
}

impl From<JsonError> for RagApiError {
    fn from(error: JsonError) -> Self {
        Self::Serde(error)
    }
}

/// Extracts a human-readable message from a non-2xx response body.
///
/// Falls back to the raw body, then to the status canonical reason.
pub fn parse_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(payload) = serde_json::from_str::<ErrorPayload>(body) {
        match payload.detail {
            Some(Value::String(detail)) if !detail.is_empty() => return detail,
            Some(Value::Null) | None => {}
            Some(detail) => return detail.to_string(),
        }
    }

    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    } else {
        body.to_string()
    }
}
