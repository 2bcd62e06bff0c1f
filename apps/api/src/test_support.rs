//! Test doubles shared by handler and pipeline tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;

use crate::llm_client::{ChatModel, LlmError};
use crate::models::mind_map::{MindMapRecord, NewMindMap};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{InMemoryStore, MindMapStore, StoreError};

/// A `ChatModel` that returns one canned reply (or API status) for every call
/// and records the prompts it was given.
pub struct ScriptedModel {
    reply: Result<String, u16>,
    pub prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(LlmError::Api {
                status: *status,
                message: "scripted failure".to_string(),
            }),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Router over a scripted model and a fresh in-memory store.
pub fn test_app(llm: ScriptedModel) -> (Router, Arc<ScriptedModel>, Arc<InMemoryStore>) {
    let llm = Arc::new(llm);
    let store = Arc::new(InMemoryStore::new());
    let state = AppState {
        llm: llm.clone(),
        store: store.clone(),
    };
    (build_router(state), llm, store)
}

/// A store whose every call fails, as if Firestore were unreachable.
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StoreError {
        StoreError::Api {
            status: 503,
            message: "store unavailable".to_string(),
        }
    }
}

#[async_trait]
impl MindMapStore for UnavailableStore {
    async fn save(&self, _new: NewMindMap) -> Result<MindMapRecord, StoreError> {
        Err(Self::error())
    }

    async fn get(&self, _id: &str) -> Result<Option<MindMapRecord>, StoreError> {
        Err(Self::error())
    }

    async fn list_for_user(
        &self,
        _user_id: &str,
        _limit: usize,
    ) -> Result<Vec<MindMapRecord>, StoreError> {
        Err(Self::error())
    }

    fn backend(&self) -> &'static str {
        "unavailable"
    }
}

/// Router over a scripted model and the given store.
pub fn test_app_with_store(llm: ScriptedModel, store: Arc<dyn MindMapStore>) -> Router {
    build_router(AppState {
        llm: Arc::new(llm),
        store,
    })
}

/// Sends one request through the router and decodes the JSON response body.
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (axum::http::StatusCode, serde_json::Value) {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use tower::ServiceExt;

    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
