//! Deterministic mock implementation of the shared `qa_provider` contract.
//!
//! This crate contains no transport logic and is intended for local
//! development and contract-level integration testing. It faithfully
//! emulates the service's conversation contract: each `ask` appends a
//! `human` entry and an `ai` entry to the session's stored history and
//! returns the full history, so callers exercise real whole-log
//! reconciliation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use qa_provider::{ChatTurn, DocumentUpload, IndexedCorpus, QaProvider, WireHistoryEntry};

/// Stable provider identifier used for explicit startup selection.
pub const MOCK_PROVIDER_ID: &str = "mock";

const DEFAULT_ANSWER: &str =
    "Based on the indexed documents, the answer is deterministic mock output.";

#[derive(Debug, Default)]
struct MockState {
    next_session: u64,
    histories: HashMap<String, Vec<WireHistoryEntry>>,
    fail_upload: Option<String>,
    fail_chat: Option<String>,
}

/// Deterministic mock provider used by `doc_chat` tests and local runs.
#[derive(Debug)]
pub struct MockProvider {
    answer: String,
    state: Mutex<MockState>,
}

impl MockProvider {
    /// Creates a mock provider that answers every question with `answer`.
    #[must_use]
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Makes the next and all subsequent uploads fail with `message`.
    pub fn fail_uploads_with(&self, message: impl Into<String>) {
        lock_unpoisoned(&self.state).fail_upload = Some(message.into());
    }

    /// Makes the next and all subsequent chat turns fail with `message`.
    pub fn fail_chats_with(&self, message: impl Into<String>) {
        lock_unpoisoned(&self.state).fail_chat = Some(message.into());
    }

    /// Restores normal success behavior for both operations.
    pub fn clear_failures(&self) {
        let mut state = lock_unpoisoned(&self.state);
        state.fail_upload = None;
        state.fail_chat = None;
    }

    /// Returns the stored history for a session, if it exists.
    #[must_use]
    pub fn history(&self, session_id: &str) -> Option<Vec<WireHistoryEntry>> {
        lock_unpoisoned(&self.state).histories.get(session_id).cloned()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(DEFAULT_ANSWER)
    }
}

impl QaProvider for MockProvider {
    fn index_documents(&self, files: &[DocumentUpload]) -> Result<IndexedCorpus, String> {
        let mut state = lock_unpoisoned(&self.state);

        if let Some(message) = state.fail_upload.clone() {
            return Err(message);
        }
        if files.is_empty() {
            return Err("Upload at least one PDF".to_string());
        }

        state.next_session += 1;
        let session_id = format!("mock-session-{}", state.next_session);
        state.histories.insert(session_id.clone(), Vec::new());

        Ok(IndexedCorpus {
            session_id,
            documents: files.len() as u64,
        })
    }

    fn ask(&self, session_id: &str, message: &str) -> Result<ChatTurn, String> {
        let mut state = lock_unpoisoned(&self.state);

        if let Some(message) = state.fail_chat.clone() {
            return Err(message);
        }

        let answer = self.answer.clone();
        let Some(history) = state.histories.get_mut(session_id) else {
            return Err("Session not found".to_string());
        };

        history.push(WireHistoryEntry::new("human", message));
        history.push(WireHistoryEntry::new("ai", answer.clone()));

        Ok(ChatTurn {
            answer,
            history: history.clone(),
        })
    }

    fn health_check(&self) -> Result<(), String> {
        Ok(())
    }
}

fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
