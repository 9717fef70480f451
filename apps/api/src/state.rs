use std::sync::Arc;

use crate::llm_client::LlmProvider;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Production: `LlmClient`. Tests swap in a scripted provider.
    pub llm: Arc<dyn LlmProvider>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmProvider>, sessions: SessionStore) -> Self {
        Self { llm, sessions }
    }
}
