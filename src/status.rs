/// Presentation-facing status and error reporting contract.
///
/// The coordinator emits a human-readable status on every state transition
/// and routes upload and chat failures through distinct channels; rendering
/// is entirely the caller's concern. Tests implement this with spies.
pub trait StatusSink {
    fn status(&mut self, text: String);
    fn upload_error(&mut self, message: String);
    fn chat_error(&mut self, message: String);
    /// Clears any previously surfaced error before a new attempt.
    fn clear_error(&mut self);
}

/// Initial status before any session exists.
pub const STATUS_AWAITING_UPLOAD: &str = "Upload PDFs to start chatting.";

/// Status emitted while an upload-and-index request is in flight.
pub const STATUS_INDEXING: &str = "Indexing your documents...";

/// Status emitted after a chat turn is confirmed.
pub const STATUS_ANSWER_READY: &str = "Answer ready. Ask another question!";

/// Status emitted when a session becomes ready.
#[must_use]
pub fn ready_status(documents: u64) -> String {
    format!("Ready! Indexed {documents} documents. Ask away.")
}
