use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::config::RagApiConfig;
use crate::error::{parse_error_message, RagApiError};
use crate::payload::{ChatRequest, ChatResponse, DocumentPart, HealthResponse, UploadResponse};
use crate::url::{chat_url, health_url, normalize_base_url, upload_url};

/// Multipart field name the service reads uploaded documents from.
const UPLOAD_FIELD_NAME: &str = "files";

#[derive(Debug)]
pub struct RagApiClient {
    http: Client,
    config: RagApiConfig,
}

impl RagApiClient {
    pub fn new(config: RagApiConfig) -> Result<Self, RagApiError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(RagApiError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &RagApiConfig {
        &self.config
    }

    pub fn normalized_base_url(&self) -> String {
        normalize_base_url(&self.config.base_url)
    }

    fn build_headers(&self) -> Result<HeaderMap, RagApiError> {
        let mut out = HeaderMap::new();
        if let Some(user_agent) = self.config.user_agent.as_deref() {
            out.insert(
                USER_AGENT,
                HeaderValue::from_str(user_agent).map_err(|_| {
                    RagApiError::Unknown(format!("invalid User-Agent value: {user_agent}"))
                })?,
            );
        }
        for (key, value) in &self.config.extra_headers {
            out.insert(
                HeaderName::from_bytes(key.as_bytes())
                    .map_err(|_| RagApiError::Unknown(format!("invalid header key: {key}")))?,
                HeaderValue::from_str(value).map_err(|_| {
                    RagApiError::Unknown(format!("invalid header value for {key}"))
                })?,
            );
        }
        Ok(out)
    }

    /// Builds the multipart upload request without sending it.
    pub fn build_upload_request(
        &self,
        documents: &[DocumentPart],
    ) -> Result<RequestBuilder, RagApiError> {
        if documents.is_empty() {
            return Err(RagApiError::EmptyUpload);
        }

        let mut form = Form::new();
        for document in documents {
            let part = Part::bytes(document.bytes.clone())
                .file_name(document.file_name.clone())
                .mime_str(&document.content_type)
                .map_err(|error| {
                    RagApiError::InvalidDocumentPart(format!(
                        "content type '{}' for '{}': {error}",
                        document.content_type, document.file_name
                    ))
                })?;
            form = form.part(UPLOAD_FIELD_NAME, part);
        }

        Ok(self
            .http
            .post(upload_url(&self.config.base_url))
            .headers(self.build_headers()?)
            .multipart(form))
    }

    /// Builds the chat request without sending it.
    pub fn build_chat_request(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<RequestBuilder, RagApiError> {
        if session_id.trim().is_empty() {
            return Err(RagApiError::EmptySessionId);
        }

        Ok(self
            .http
            .post(chat_url(&self.config.base_url, session_id))
            .headers(self.build_headers()?)
            .json(&ChatRequest::new(message)))
    }

    /// Builds the health request without sending it.
    pub fn build_health_request(&self) -> Result<RequestBuilder, RagApiError> {
        Ok(self
            .http
            .get(health_url(&self.config.base_url))
            .headers(self.build_headers()?))
    }

    /// Uploads documents and returns the session the service created.
    pub async fn upload_documents(
        &self,
        documents: &[DocumentPart],
    ) -> Result<UploadResponse, RagApiError> {
        let request = self.build_upload_request(documents)?;
        self.execute(request).await
    }

    /// Runs one chat turn scoped to `session_id`.
    pub async fn chat(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<ChatResponse, RagApiError> {
        let request = self.build_chat_request(session_id, message)?;
        self.execute(request).await
    }

    /// Checks service liveness.
    pub async fn health(&self) -> Result<HealthResponse, RagApiError> {
        let request = self.build_health_request()?;
        self.execute(request).await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RagApiError> {
        let response = request.send().await.map_err(RagApiError::from)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RagApiError::Status(
                status,
                parse_error_message(status, &body),
            ));
        }

        let body = response.text().await.map_err(RagApiError::from)?;
        serde_json::from_str(&body).map_err(RagApiError::from)
    }
}
