//! Axum route handlers for mind map generation and persistence.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::fallback::Category;
use crate::mindmap::generator::{expand_node, generate_mind_map};
use crate::mindmap::normalize::normalize_mind_map;
use crate::models::career::CareerPreferences;
use crate::models::mind_map::{
    MindMap, MindMapEdge, MindMapNode, MindMapRecord, NewMindMap, ResponseSource,
};
use crate::state::AppState;
use crate::store::MAX_LIST_LIMIT;

const DEFAULT_TITLE: &str = "Career Mind Map";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateMindMapResponse {
    /// Document id, omitted when persisting failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub mind_map: MindMap,
    pub source: ResponseSource,
    pub category: Category,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandNodeRequest {
    pub node_id: String,
    pub label: String,
    #[serde(default)]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandNodeResponse {
    pub parent_id: String,
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
    pub source: ResponseSource,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMindMapRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub mind_map: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveMindMapResponse {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub user_id: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate-mindmap
///
/// Generates a mind map from the preference form and stores it. Model failures
/// produce the category fallback map; storage failures only drop the `id`.
pub async fn handle_generate_mind_map(
    State(state): State<AppState>,
    payload: Result<Json<CareerPreferences>, JsonRejection>,
) -> Result<Json<GenerateMindMapResponse>, AppError> {
    let Json(prefs) = payload?;
    if prefs.is_blank() {
        return Err(AppError::Validation(
            "at least one preference field is required".to_string(),
        ));
    }

    let generated = generate_mind_map(state.llm.as_ref(), &prefs).await;

    let new = NewMindMap {
        user_id: prefs.user_id.clone(),
        title: generated
            .mind_map
            .root_label()
            .unwrap_or(DEFAULT_TITLE)
            .to_string(),
        mind_map: generated.mind_map.clone(),
        source: generated.source,
        preferences: serde_json::to_value(&prefs).unwrap_or_default(),
    };
    let id = match state.store.save(new).await {
        Ok(record) => Some(record.id),
        Err(e) => {
            warn!("Could not persist generated mind map: {e}");
            None
        }
    };

    Ok(Json(GenerateMindMapResponse {
        id,
        mind_map: generated.mind_map,
        source: generated.source,
        category: generated.category,
    }))
}

/// POST /api/expand-node
///
/// Returns child nodes and edges to graft under an existing node.
pub async fn handle_expand_node(
    State(state): State<AppState>,
    payload: Result<Json<ExpandNodeRequest>, JsonRejection>,
) -> Result<Json<ExpandNodeResponse>, AppError> {
    let Json(request) = payload?;
    let node_id = request.node_id.trim();
    let label = request.label.trim();
    if node_id.is_empty() || label.is_empty() {
        return Err(AppError::Validation(
            "nodeId and label cannot be empty".to_string(),
        ));
    }

    let expansion = expand_node(
        state.llm.as_ref(),
        node_id,
        label,
        request.context.as_deref(),
    )
    .await;

    Ok(Json(ExpandNodeResponse {
        parent_id: node_id.to_string(),
        nodes: expansion.nodes,
        edges: expansion.edges,
        source: expansion.source,
    }))
}

/// POST /api/mindmaps
///
/// Stores a client-edited mind map after normalizing its node shapes.
pub async fn handle_save_mind_map(
    State(state): State<AppState>,
    payload: Result<Json<SaveMindMapRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SaveMindMapResponse>), AppError> {
    let Json(request) = payload?;

    let mind_map = normalize_mind_map(&request.mind_map)
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::Validation("mindMap must contain a non-empty node list".to_string()))?;

    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .or_else(|| mind_map.root_label())
        .unwrap_or(DEFAULT_TITLE)
        .to_string();

    let record = state
        .store
        .save(NewMindMap {
            user_id: request.user_id,
            title,
            mind_map,
            source: ResponseSource::User,
            preferences: Value::Null,
        })
        .await?;

    info!("Saved mind map {} ({} nodes)", record.id, record.mind_map.nodes.len());

    Ok((
        StatusCode::CREATED,
        Json(SaveMindMapResponse {
            id: record.id,
            created_at: record.created_at,
        }),
    ))
}

/// GET /api/mindmaps/:id
pub async fn handle_get_mind_map(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MindMapRecord>, AppError> {
    if !is_valid_document_id(&id) {
        return Err(AppError::Validation(format!("invalid mind map id '{id}'")));
    }

    state
        .store
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Mind map {id} not found")))
}

/// GET /api/mindmaps?userId=...&limit=...
pub async fn handle_list_mind_maps(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Json<Vec<MindMapRecord>>, AppError> {
    let Query(params) = query?;
    if params.user_id.trim().is_empty() {
        return Err(AppError::Validation("userId cannot be empty".to_string()));
    }
    let limit = params.limit.unwrap_or(MAX_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT);
    let records = state.store.list_for_user(&params.user_id, limit).await?;
    Ok(Json(records))
}

/// Ids end up in Firestore document paths, so only URL-safe characters pass.
fn is_valid_document_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
