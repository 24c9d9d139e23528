use qa_provider::{DocumentUpload, IndexedCorpus};
use thiserror::Error;

use crate::status::{ready_status, StatusSink, STATUS_INDEXING};

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("select at least one document to upload")]
    NoDocuments,

    #[error("upload failed: {0}")]
    Backend(String),
}

/// Owner of the current session identifier and its readiness.
///
/// A session is never mutated in place: a new successful upload replaces the
/// identifier atomically, and the caller discards the conversation log that
/// belonged to the replaced session in the same step (see `ChatApp`).
///
/// Concurrent uploads are caller-gated. `begin_upload` does not queue or
/// reject a second call while one is in flight; the UI disables the upload
/// control instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionLifecycle {
    session_id: Option<String>,
    uploading: bool,
    uploaded_files: Vec<String>,
}

impl SessionLifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    #[must_use]
    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// File names staged for display alongside the current or most recent
    /// upload.
    #[must_use]
    pub fn uploaded_files(&self) -> &[String] {
        &self.uploaded_files
    }

    /// Marks an upload as started and stages its file names for display.
    ///
    /// Rejects an empty document set before any provider work happens.
    pub fn begin_upload(
        &mut self,
        files: &[DocumentUpload],
        sink: &mut dyn StatusSink,
    ) -> Result<(), UploadError> {
        if files.is_empty() {
            return Err(UploadError::NoDocuments);
        }

        self.uploaded_files = files.iter().map(|file| file.file_name.clone()).collect();
        self.uploading = true;
        sink.clear_error();
        sink.status(STATUS_INDEXING.to_string());
        Ok(())
    }

    /// Adopts the session the service created and resolves the upload.
    ///
    /// The caller discards the conversation log of any session this one
    /// replaces; this type never touches the log.
    pub fn apply_upload_success(&mut self, corpus: &IndexedCorpus, sink: &mut dyn StatusSink) {
        self.session_id = Some(corpus.session_id.clone());
        self.uploading = false;
        sink.status(ready_status(corpus.documents));
    }

    /// Resolves the upload as failed.
    ///
    /// A previously established session stays usable; only the in-flight
    /// flag and the staged-file record are reset.
    pub fn apply_upload_failure(&mut self, message: String, sink: &mut dyn StatusSink) {
        self.uploading = false;
        self.uploaded_files.clear();
        sink.upload_error(message);
    }
}
