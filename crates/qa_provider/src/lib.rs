//! Minimal provider-agnostic contract for the document QA service.
//!
//! This crate intentionally defines only the two session-scoped operations
//! the coordinator needs — index a document set into a session, and run one
//! chat turn against it — plus the shared types both sides of that seam
//! exchange. It excludes transport details, protocol payloads, and any
//! conversation state.

use std::fmt;

/// One document handed to a provider for indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Outcome of a successful indexing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedCorpus {
    /// Opaque identifier issued by the service for this document set.
    pub session_id: String,
    /// Number of documents the service indexed.
    pub documents: u64,
}

/// One conversation turn in the service's external representation.
///
/// `role` is a service-defined vocabulary including at least `human` and
/// `ai`; unrecognized values are carried verbatim, never rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireHistoryEntry {
    pub role: String,
    pub content: String,
}

impl WireHistoryEntry {
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Outcome of one successful chat turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// The generated answer for this turn.
    pub answer: String,
    /// The full authoritative conversation history for the session,
    /// including this turn.
    pub history: Vec<WireHistoryEntry>,
}

/// Error returned while constructing/configuring a provider before any
/// operation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderInitError {
    message: String,
}

impl ProviderInitError {
    /// Creates a new provider initialization error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the underlying error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProviderInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ProviderInitError {}

impl From<String> for ProviderInitError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ProviderInitError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Provider interface for session creation and chat turns.
///
/// Errors cross this seam as plain strings; transport-level and
/// application-level failures are deliberately not distinguished.
pub trait QaProvider: Send + Sync + 'static {
    /// Indexes a document set and returns the session the service created.
    fn index_documents(&self, files: &[DocumentUpload]) -> Result<IndexedCorpus, String>;

    /// Runs one chat turn scoped to `session_id` and returns the service's
    /// authoritative history.
    fn ask(&self, session_id: &str, message: &str) -> Result<ChatTurn, String>;

    /// Checks provider liveness.
    ///
    /// Providers may return an error when liveness checks are unsupported.
    fn health_check(&self) -> Result<(), String> {
        Err("Health checks are not supported by this provider".to_string())
    }
}
