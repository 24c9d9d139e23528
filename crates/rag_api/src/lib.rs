//! Transport-only client primitives for the document QA service.
//!
//! This crate owns request building, response parsing, and error mapping for
//! the service's three endpoints: multipart document upload, per-session
//! chat, and health. It intentionally contains no session or conversation
//! state and no UI coupling; any non-2xx response is surfaced uniformly as
//! [`RagApiError::Status`] with a message parsed from the body.

pub mod client;
pub mod config;
pub mod error;
pub mod payload;
pub mod url;

pub use client::RagApiClient;
pub use config::RagApiConfig;
pub use error::{parse_error_message, RagApiError, StatusCode};
pub use payload::{
    ChatRequest, ChatResponse, DocumentPart, HealthResponse, UploadResponse, WireMessage,
};
pub use url::{chat_url, health_url, normalize_base_url, upload_url, DEFAULT_RAG_BASE_URL};
