// Shared across several test binaries; each one uses a different subset.
#![allow(dead_code)]

use std::sync::Mutex;

use doc_chat::StatusSink;
use qa_provider::{ChatTurn, DocumentUpload, IndexedCorpus, QaProvider, WireHistoryEntry};

/// Records every status and error signal the coordinator emits.
#[derive(Debug, Default)]
pub struct SinkSpy {
    pub statuses: Vec<String>,
    pub upload_errors: Vec<String>,
    pub chat_errors: Vec<String>,
    pub error_clears: usize,
}

impl StatusSink for SinkSpy {
    fn status(&mut self, text: String) {
        self.statuses.push(text);
    }

    fn upload_error(&mut self, message: String) {
        self.upload_errors.push(message);
    }

    fn chat_error(&mut self, message: String) {
        self.chat_errors.push(message);
    }

    fn clear_error(&mut self) {
        self.error_clears += 1;
    }
}

/// Provider whose outcomes are scripted per call, consumed front to back.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    upload_outcomes: Mutex<Vec<Result<IndexedCorpus, String>>>,
    ask_outcomes: Mutex<Vec<Result<ChatTurn, String>>>,
    observed_uploads: Mutex<Vec<Vec<String>>>,
    observed_asks: Mutex<Vec<(String, String)>>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue_upload(&self, outcome: Result<IndexedCorpus, String>) {
        lock(&self.upload_outcomes).push(outcome);
    }

    pub fn queue_ask(&self, outcome: Result<ChatTurn, String>) {
        lock(&self.ask_outcomes).push(outcome);
    }

    /// File-name sets observed across `index_documents` calls.
    pub fn observed_uploads(&self) -> Vec<Vec<String>> {
        lock(&self.observed_uploads).clone()
    }

    /// `(session_id, message)` pairs observed across `ask` calls.
    pub fn observed_asks(&self) -> Vec<(String, String)> {
        lock(&self.observed_asks).clone()
    }
}

impl QaProvider for ScriptedProvider {
    fn index_documents(&self, files: &[DocumentUpload]) -> Result<IndexedCorpus, String> {
        lock(&self.observed_uploads).push(
            files
                .iter()
                .map(|file| file.file_name.clone())
                .collect::<Vec<_>>(),
        );

        let mut outcomes = lock(&self.upload_outcomes);
        assert!(
            !outcomes.is_empty(),
            "scripted provider ran out of upload outcomes"
        );
        outcomes.remove(0)
    }

    fn ask(&self, session_id: &str, message: &str) -> Result<ChatTurn, String> {
        lock(&self.observed_asks).push((session_id.to_string(), message.to_string()));

        let mut outcomes = lock(&self.ask_outcomes);
        assert!(
            !outcomes.is_empty(),
            "scripted provider ran out of ask outcomes"
        );
        outcomes.remove(0)
    }
}

pub fn files(names: &[&str]) -> Vec<DocumentUpload> {
    names
        .iter()
        .map(|name| DocumentUpload::new(*name, vec![0x25, 0x50, 0x44, 0x46]))
        .collect()
}

pub fn corpus(session_id: &str, documents: u64) -> IndexedCorpus {
    IndexedCorpus {
        session_id: session_id.to_string(),
        documents,
    }
}

pub fn turn(answer: &str, history: &[(&str, &str)]) -> ChatTurn {
    ChatTurn {
        answer: answer.to_string(),
        history: history
            .iter()
            .map(|(role, content)| WireHistoryEntry::new(*role, *content))
            .collect(),
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
