use std::sync::Arc;

use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Completion backend. Default: `LlmClient`; tests swap in a stub.
    pub llm: Arc<dyn CompletionService>,
}
