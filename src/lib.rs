//! Client-side coordinator for a document question-answering service.
//!
//! This crate is the contract between a UI and the remote service: it owns
//! session creation from uploaded documents, the optimistic-update protocol
//! for locally-originated chat messages, and the reconciliation of the local
//! conversation log against the server's authoritative history.
//!
//! The coordinator is a pure state machine driven through begin/apply pairs
//! (one network round trip per operation, applied in arrival order) and
//! reports every transition through the [`StatusSink`] contract. Transport
//! lives behind the provider-neutral `qa_provider` seam; see the
//! `qa_provider_rag_api` crate for the HTTP implementation and
//! `qa_provider_mock` for a deterministic in-memory one.

pub mod app;
pub mod chat;
pub mod history;
pub mod message;
pub mod session;
pub mod status;

pub use app::ChatApp;
pub use chat::{ChatCoordinator, SendError};
pub use history::normalize;
pub use message::{new_message_id, Message, Role};
pub use session::{SessionLifecycle, UploadError};
pub use status::{
    ready_status, StatusSink, STATUS_ANSWER_READY, STATUS_AWAITING_UPLOAD, STATUS_INDEXING,
};
