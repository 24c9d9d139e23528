use qa_provider::{DocumentUpload, QaProvider};

use crate::chat::{ChatCoordinator, SendError};
use crate::session::{SessionLifecycle, UploadError};
use crate::status::StatusSink;

/// Composition of the two coordinator state machines.
///
/// Owns the readiness gate: chat is permitted only when a session exists and
/// no upload is in flight. Callers additionally suppress `send` while
/// `is_sending` is true; neither state machine enforces single-flight.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatApp {
    session: SessionLifecycle,
    chat: ChatCoordinator,
}

impl ChatApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session(&self) -> &SessionLifecycle {
        &self.session
    }

    #[must_use]
    pub fn chat(&self) -> &ChatCoordinator {
        &self.chat
    }

    /// Readiness gate for the chat input.
    #[must_use]
    pub fn can_send(&self) -> bool {
        self.session.session_id().is_some() && !self.session.is_uploading()
    }

    /// Drives one upload round trip.
    ///
    /// On success the previous session and its conversation log are
    /// discarded together; on failure both stay exactly as they were.
    pub fn upload(
        &mut self,
        files: &[DocumentUpload],
        provider: &dyn QaProvider,
        sink: &mut dyn StatusSink,
    ) -> Result<(), UploadError> {
        self.session.begin_upload(files, sink)?;

        match provider.index_documents(files) {
            Ok(corpus) => {
                self.chat.clear_log();
                self.session.apply_upload_success(&corpus, sink);
                Ok(())
            }
            Err(message) => {
                self.session.apply_upload_failure(message.clone(), sink);
                Err(UploadError::Backend(message))
            }
        }
    }

    /// Drives one chat round trip against the active session.
    pub fn send(
        &mut self,
        text: &str,
        provider: &dyn QaProvider,
        sink: &mut dyn StatusSink,
    ) -> Result<(), SendError> {
        let Some(session_id) = self.session.session_id().map(str::to_string) else {
            // Surfaces the no-session failure without any log mutation.
            return self.chat.begin_send(text, None, sink);
        };

        self.chat.begin_send(text, Some(&session_id), sink)?;

        match provider.ask(&session_id, text) {
            Ok(turn) => {
                self.chat.apply_send_success(&turn.history, sink);
                Ok(())
            }
            Err(message) => {
                self.chat.apply_send_failure(message.clone(), sink);
                Err(SendError::Backend(message))
            }
        }
    }
}
