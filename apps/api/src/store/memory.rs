use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::mind_map::{MindMapRecord, NewMindMap};

use super::{MindMapStore, StoreError, MAX_LIST_LIMIT};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, MindMapRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MindMapStore for InMemoryStore {
    async fn save(&self, new: NewMindMap) -> Result<MindMapRecord, StoreError> {
        let record = MindMapRecord {
            id: Uuid::new_v4().to_string(),
            user_id: new.user_id,
            title: new.title,
            mind_map: new.mind_map,
            source: new.source,
            preferences: new.preferences,
            created_at: Utc::now(),
        };
        self.records
            .write()
            .await
            .insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<MindMapRecord>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MindMapRecord>, StoreError> {
        let records = self.records.read().await;
        let mut mine: Vec<MindMapRecord> = records
            .values()
            .filter(|r| r.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        mine.truncate(limit.min(MAX_LIST_LIMIT));
        Ok(mine)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
