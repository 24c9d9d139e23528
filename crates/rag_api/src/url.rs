/// Default base URL for the document QA service.
pub const DEFAULT_RAG_BASE_URL: &str = "http://localhost:8000";

/// Normalize a configured base URL.
///
/// Normalization rules:
/// 1) empty or whitespace-only input falls back to the default base URL
/// 2) surrounding whitespace is trimmed
/// 3) trailing slashes are trimmed
pub fn normalize_base_url(input: &str) -> String {
    let base = if input.trim().is_empty() {
        DEFAULT_RAG_BASE_URL
    } else {
        input.trim()
    };

    base.trim_end_matches('/').to_string()
}

/// Endpoint for creating a session from uploaded documents.
pub fn upload_url(base: &str) -> String {
    format!("{}/sessions/upload", normalize_base_url(base))
}

/// Endpoint for one chat turn scoped to a session.
///
/// The session identifier is opaque to this client and is inserted verbatim;
/// the service issued it and is expected to round-trip it unchanged.
pub fn chat_url(base: &str, session_id: &str) -> String {
    format!("{}/sessions/{}/chat", normalize_base_url(base), session_id)
}

/// Service liveness endpoint.
pub fn health_url(base: &str) -> String {
    format!("{}/health", normalize_base_url(base))
}
