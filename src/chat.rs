use qa_provider::WireHistoryEntry;
use thiserror::Error;

use crate::history::normalize;
use crate::message::Message;
use crate::status::{StatusSink, STATUS_ANSWER_READY};

#[derive(Debug, Error)]
pub enum SendError {
    #[error("Upload PDFs first to start a session.")]
    NoActiveSession,

    #[error("chat failed: {0}")]
    Backend(String),
}

/// Owner of the conversation log.
///
/// While idle the log equals the last authoritative history the service
/// returned for the current session. During a pending send it equals that
/// history plus one optimistic user message. Reconciliation is whole-log
/// replacement, never a merge: the service's returned history is the sole
/// source of truth once a turn is confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatCoordinator {
    log: Vec<Message>,
    sending: bool,
}

impl ChatCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn log(&self) -> &[Message] {
        &self.log
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Appends the optimistic user message and marks the send as in flight.
    ///
    /// With no active session this fails immediately: no log mutation and no
    /// provider work. A send already in flight does not block a second
    /// begin; overlapping sends are caller-gated, and their responses are
    /// applied in arrival order by the `apply_*` calls, so the last response
    /// to arrive determines the visible log.
    pub fn begin_send(
        &mut self,
        text: &str,
        session_id: Option<&str>,
        sink: &mut dyn StatusSink,
    ) -> Result<(), SendError> {
        if session_id.is_none() {
            let error = SendError::NoActiveSession;
            sink.chat_error(error.to_string());
            return Err(error);
        }

        self.sending = true;
        sink.clear_error();
        self.log.push(Message::optimistic_user(text));
        Ok(())
    }

    /// Replaces the whole log with the normalized authoritative history and
    /// resolves the send.
    pub fn apply_send_success(&mut self, history: &[WireHistoryEntry], sink: &mut dyn StatusSink) {
        self.log = normalize(history);
        self.sending = false;
        sink.status(STATUS_ANSWER_READY.to_string());
    }

    /// Resolves the send as failed.
    ///
    /// The optimistic message is not rolled back; it stays visible,
    /// unconfirmed.
    pub fn apply_send_failure(&mut self, message: String, sink: &mut dyn StatusSink) {
        self.sending = false;
        sink.chat_error(message);
    }

    /// Discards the log unconditionally.
    ///
    /// The log belongs to the session that produced it; a replacement
    /// session never inherits or merges it.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }
}
