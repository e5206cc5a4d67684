use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and immutable afterwards; every pipeline run is
/// self-contained and shares nothing mutable with any other run.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client for job-page fetches. Client-default timeout and
    /// redirect behavior, no custom headers.
    pub http: reqwest::Client,
    pub llm: LlmClient,
}
