use std::sync::Arc;

use crate::llm_client::ChatModel;
use crate::store::MindMapStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Chat-completion backend. Default: `OpenAiClient`; tests script their own.
    pub llm: Arc<dyn ChatModel>,
    /// Firestore when FIREBASE_PROJECT_ID is set, otherwise `InMemoryStore`.
    pub store: Arc<dyn MindMapStore>,
}
