//! Mind map persistence. `AppState` holds an `Arc<dyn MindMapStore>`:
//! Firestore in production, the in-memory store in tests and local runs
//! without a Firebase project.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::mind_map::{MindMapRecord, NewMindMap};

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreStore;
pub use memory::InMemoryStore;

/// Upper bound on `list_for_user` results.
pub const MAX_LIST_LIMIT: usize = 50;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Firestore error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Malformed document: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

#[async_trait]
pub trait MindMapStore: Send + Sync {
    /// Persists a new mind map, assigning id and creation time.
    async fn save(&self, new: NewMindMap) -> Result<MindMapRecord, StoreError>;

    async fn get(&self, id: &str) -> Result<Option<MindMapRecord>, StoreError>;

    /// A user's maps, newest first, at most `limit` (capped at `MAX_LIST_LIMIT`).
    async fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MindMapRecord>, StoreError>;

    /// Backend name reported by `/health`.
    fn backend(&self) -> &'static str;
}
