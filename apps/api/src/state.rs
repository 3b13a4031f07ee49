use std::sync::Arc;

use crate::documents::DocumentStore;
use crate::llm_client::TextCompletion;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model backend for resume generation. `LlmClient` in production.
    pub llm: Arc<dyn TextCompletion>,
    /// Saved-resume storage, chosen at startup via `STORAGE`.
    pub documents: Arc<dyn DocumentStore>,
}

#[cfg(test)]
impl AppState {
    /// In-memory documents and a canned model reply.
    pub fn for_tests(reply: &str) -> Self {
        use crate::documents::MemoryDocumentStore;
        use crate::llm_client::testing::CannedCompletion;

        AppState {
            llm: Arc::new(CannedCompletion::reply(reply)),
            documents: Arc::new(MemoryDocumentStore::default()),
        }
    }
}
