use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Canonical node shape sent to clients: `{ id, data: { label, .. }, .. }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapNode {
    pub id: String,
    pub data: NodeData,
    /// Layout hints (`position`, `type`, ...) passed through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeData {
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindMapEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MindMap {
    pub nodes: Vec<MindMapNode>,
    #[serde(default)]
    pub edges: Vec<MindMapEdge>,
}

impl MindMapNode {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            data: NodeData {
                label: label.into(),
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }
}

impl MindMapEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e{source}-{target}"),
            source,
            target,
            extra: Map::new(),
        }
    }
}

impl MindMap {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Label of the first node, used as the stored map's title.
    pub fn root_label(&self) -> Option<&str> {
        self.nodes.first().map(|n| n.data.label.as_str())
    }
}

/// Where a payload came from. Clients show a notice for `fallback`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseSource {
    Ai,
    Fallback,
    User,
}

/// A mind map as persisted in the document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindMapRecord {
    pub id: String,
    pub user_id: Option<String>,
    pub title: String,
    pub mind_map: MindMap,
    pub source: ResponseSource,
    #[serde(default)]
    pub preferences: Value,
    pub created_at: DateTime<Utc>,
}

/// Input to `MindMapStore::save`; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewMindMap {
    pub user_id: Option<String>,
    pub title: String,
    pub mind_map: MindMap,
    pub source: ResponseSource,
    pub preferences: Value,
}
