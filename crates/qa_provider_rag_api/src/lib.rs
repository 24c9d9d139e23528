//! HTTP-backed implementation of the shared `qa_provider` contract.
//!
//! This adapter translates `rag_api` wire payloads into the provider-neutral
//! types expected by the coordinator, and bridges the coordinator's
//! synchronous call sites onto the async transport client.

use std::sync::Arc;
use std::time::Duration;

use qa_provider::{
    ChatTurn, DocumentUpload, IndexedCorpus, ProviderInitError, QaProvider, WireHistoryEntry,
};
use rag_api::{
    ChatResponse, DocumentPart, RagApiClient, RagApiConfig, RagApiError, UploadResponse,
};

/// Stable provider identifier for startup selection and diagnostics.
pub const RAG_API_PROVIDER_ID: &str = "rag-api";

/// Runtime configuration for the HTTP provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RagApiProviderConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub timeout: Option<Duration>,
}

impl RagApiProviderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn into_rag_api_config(self) -> RagApiConfig {
        let mut config = match self.base_url {
            Some(base_url) => RagApiConfig::new(base_url),
            None => RagApiConfig::default(),
        };

        if let Some(user_agent) = self.user_agent {
            config = config.with_user_agent(user_agent);
        }

        if let Some(timeout) = self.timeout {
            config = config.with_timeout(timeout);
        }

        config
    }
}

impl Default for RagApiProviderConfig {
    fn default() -> Self {
        Self::new()
    }
}

trait TransportClient: Send + Sync {
    fn upload(&self, documents: &[DocumentPart]) -> Result<UploadResponse, RagApiError>;
    fn chat(&self, session_id: &str, message: &str) -> Result<ChatResponse, RagApiError>;
    fn health(&self) -> Result<(), RagApiError>;
}

#[derive(Debug)]
struct DefaultTransportClient {
    client: RagApiClient,
}

impl DefaultTransportClient {
    fn block_on<F, T>(&self, future: F) -> Result<T, RagApiError>
    where
        F: std::future::Future<Output = Result<T, RagApiError>>,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| {
                RagApiError::Unknown(format!("failed to initialize tokio runtime: {error}"))
            })?;

        runtime.block_on(future)
    }
}

impl TransportClient for DefaultTransportClient {
    fn upload(&self, documents: &[DocumentPart]) -> Result<UploadResponse, RagApiError> {
        self.block_on(self.client.upload_documents(documents))
    }

    fn chat(&self, session_id: &str, message: &str) -> Result<ChatResponse, RagApiError> {
        self.block_on(self.client.chat(session_id, message))
    }

    fn health(&self) -> Result<(), RagApiError> {
        self.block_on(async {
            self.client.health().await?;
            Ok(())
        })
    }
}

/// `QaProvider` adapter backed by `rag_api` transport primitives.
pub struct RagApiProvider {
    transport: Arc<dyn TransportClient>,
}

impl RagApiProvider {
    /// Creates a provider using real HTTP transport.
    pub fn new(config: RagApiProviderConfig) -> Result<Self, ProviderInitError> {
        let transport = Arc::new(DefaultTransportClient {
            client: RagApiClient::new(config.into_rag_api_config()).map_err(map_init_error)?,
        });

        Ok(Self { transport })
    }

    #[cfg(test)]
    fn with_transport_for_tests(transport: Arc<dyn TransportClient>) -> Self {
        Self { transport }
    }
}

impl QaProvider for RagApiProvider {
    fn index_documents(&self, files: &[DocumentUpload]) -> Result<IndexedCorpus, String> {
        let documents: Vec<DocumentPart> = files
            .iter()
            .map(|file| DocumentPart::new(file.file_name.clone(), file.bytes.clone()))
            .collect();

        let response = self
            .transport
            .upload(&documents)
            .map_err(|error| format!("Upload request failed: {error}"))?;

        Ok(IndexedCorpus {
            session_id: response.session_id,
            documents: response.documents,
        })
    }

    fn ask(&self, session_id: &str, message: &str) -> Result<ChatTurn, String> {
        let response = self
            .transport
            .chat(session_id, message)
            .map_err(|error| format!("Chat request failed: {error}"))?;

        Ok(ChatTurn {
            answer: response.answer,
            history: response
                .history
                .into_iter()
                .map(|entry| WireHistoryEntry::new(entry.role, entry.content))
                .collect(),
        })
    }

    fn health_check(&self) -> Result<(), String> {
        self.transport
            .health()
            .map_err(|error| format!("Health check failed: {error}"))
    }
}

fn map_init_error(error: RagApiError) -> ProviderInitError {
    ProviderInitError::new(format!("Failed to initialize rag-api provider: {error}"))
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rag_api::{StatusCode, WireMessage};

    use super::*;

    #[derive(Default)]
    struct FakeTransportClient {
        observed_session: Mutex<Option<String>>,
        upload_outcome: Mutex<Option<Result<UploadResponse, RagApiError>>>,
        chat_outcome: Mutex<Option<Result<ChatResponse, RagApiError>>>,
    }

    impl FakeTransportClient {
        fn with_upload(outcome: Result<UploadResponse, RagApiError>) -> Arc<Self> {
            let fake = Self::default();
            *lock_unpoisoned(&fake.upload_outcome) = Some(outcome);
            Arc::new(fake)
        }

        fn with_chat(outcome: Result<ChatResponse, RagApiError>) -> Arc<Self> {
            let fake = Self::default();
            *lock_unpoisoned(&fake.chat_outcome) = Some(outcome);
            Arc::new(fake)
        }

        fn observed_session(&self) -> Option<String> {
            lock_unpoisoned(&self.observed_session).clone()
        }
    }

    impl TransportClient for FakeTransportClient {
        fn upload(&self, _documents: &[DocumentPart]) -> Result<UploadResponse, RagApiError> {
            lock_unpoisoned(&self.upload_outcome)
                .take()
                .expect("fake upload outcome should be consumed exactly once")
        }

        fn chat(&self, session_id: &str, _message: &str) -> Result<ChatResponse, RagApiError> {
            *lock_unpoisoned(&self.observed_session) = Some(session_id.to_string());
            lock_unpoisoned(&self.chat_outcome)
                .take()
                .expect("fake chat outcome should be consumed exactly once")
        }

        fn health(&self) -> Result<(), RagApiError> {
            Ok(())
        }
    }

    fn lock_unpoisoned<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
        match mutex.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    #[test]
    fn index_documents_maps_upload_response_to_indexed_corpus() {
        let fake = FakeTransportClient::with_upload(Ok(UploadResponse {
            session_id: "s1".to_string(),
            documents: 2,
        }));
        let provider = RagApiProvider::with_transport_for_tests(fake);

        let corpus = provider
            .index_documents(&[
                DocumentUpload::new("a.pdf", vec![1]),
                DocumentUpload::new("b.pdf", vec![2]),
            ])
            .expect("indexing should succeed");

        assert_eq!(corpus.session_id, "s1");
        assert_eq!(corpus.documents, 2);
    }

    #[test]
    fn index_documents_maps_transport_error_to_string_channel() {
        let fake = FakeTransportClient::with_upload(Err(RagApiError::Status(
            StatusCode::BAD_REQUEST,
            "Only PDF files are supported".to_string(),
        )));
        let provider = RagApiProvider::with_transport_for_tests(fake);

        let error = provider
            .index_documents(&[DocumentUpload::new("a.txt", vec![1])])
            .expect_err("upload failure should surface");

        assert!(error.contains("Upload request failed"));
        assert!(error.contains("Only PDF files are supported"));
    }

    #[test]
    fn ask_forwards_session_id_and_maps_history() {
        let fake = FakeTransportClient::with_chat(Ok(ChatResponse {
            answer: "X is ...".to_string(),
            history: vec![
                WireMessage::new("human", "What is X?"),
                WireMessage::new("ai", "X is ..."),
            ],
        }));
        let provider = RagApiProvider::with_transport_for_tests(Arc::clone(&fake) as _);

        let turn = provider
            .ask("s1", "What is X?")
            .expect("chat turn should succeed");

        assert_eq!(fake.observed_session().as_deref(), Some("s1"));
        assert_eq!(turn.answer, "X is ...");
        assert_eq!(
            turn.history,
            vec![
                WireHistoryEntry::new("human", "What is X?"),
                WireHistoryEntry::new("ai", "X is ..."),
            ]
        );
    }

    #[test]
    fn ask_maps_missing_session_status_to_string_channel() {
        let fake = FakeTransportClient::with_chat(Err(RagApiError::Status(
            StatusCode::NOT_FOUND,
            "Session not found".to_string(),
        )));
        let provider = RagApiProvider::with_transport_for_tests(fake);

        let error = provider
            .ask("stale", "What is X?")
            .expect_err("chat failure should surface");

        assert!(error.contains("Chat request failed"));
        assert!(error.contains("Session not found"));
    }

    #[test]
    fn provider_config_converts_into_transport_config() {
        let config = RagApiProviderConfig::new()
            .with_base_url("https://qa.example.com")
            .with_user_agent("doc-chat")
            .with_timeout(Duration::from_secs(30))
            .into_rag_api_config();

        assert_eq!(config.base_url, "https://qa.example.com");
        assert_eq!(config.user_agent.as_deref(), Some("doc-chat"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    }
}
