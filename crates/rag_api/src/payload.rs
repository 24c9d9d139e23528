use serde::{Deserialize, Serialize};

/// Default MIME type attached to uploaded document parts.
///
/// The service only accepts PDF payloads (or opaque octet streams), so this
/// is the safe default for callers that do not know better.
pub const DEFAULT_DOCUMENT_CONTENT_TYPE: &str = "application/pdf";

/// One document staged for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPart {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DocumentPart {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: DEFAULT_DOCUMENT_CONTENT_TYPE.to_string(),
            bytes,
        }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

/// Request body for the chat endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One conversation turn as the service represents it on the wire.
///
/// `role` is a service-defined vocabulary (at least `human` and `ai`);
/// this crate does not interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

impl WireMessage {
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Success payload for the chat endpoint.
///
/// `history` is the full authoritative conversation for the session. A body
/// missing either field fails deserialization rather than defaulting; the
/// caller surfaces that as a chat failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
    pub history: Vec<WireMessage>,
}

/// Success payload for the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub session_id: String,
    pub documents: u64,
}

/// Success payload for the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
