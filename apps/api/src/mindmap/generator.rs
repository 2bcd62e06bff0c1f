//! Mind map pipeline: prompt → model (with retry) → extract → parse → normalize,
//! with the category fallback map substituted on any failure.

use serde_json::Value;
use tracing::{info, warn};

use crate::fallback::expansion::fallback_expansion;
use crate::fallback::mind_maps::fallback_mind_map;
use crate::fallback::Category;
use crate::llm_client::prompts::{CAREER_ADVISOR_SYSTEM, CONCISE_LABELS_INSTRUCTION};
use crate::llm_client::{call_json, ChatModel, LlmError};
use crate::mindmap::normalize::{normalize_mind_map, normalize_node, PLACEHOLDER_LABEL};
use crate::mindmap::prompts::{EXPAND_NODE_PROMPT_TEMPLATE, MIND_MAP_PROMPT_TEMPLATE};
use crate::models::career::CareerPreferences;
use crate::models::mind_map::{MindMap, MindMapEdge, MindMapNode, ResponseSource};

/// Maximum children attached to an expanded node.
const MAX_EXPANSION_CHILDREN: usize = 6;

pub struct GeneratedMap {
    pub mind_map: MindMap,
    pub source: ResponseSource,
    pub category: Category,
}

pub fn build_mind_map_prompt(prefs: &CareerPreferences) -> String {
    MIND_MAP_PROMPT_TEMPLATE
        .replace("{concise_labels}", CONCISE_LABELS_INSTRUCTION)
        .replace("{profile}", &prefs.profile_block())
}

pub fn build_expand_prompt(label: &str, context: Option<&str>) -> String {
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("none provided");
    EXPAND_NODE_PROMPT_TEMPLATE
        .replace("{concise_labels}", CONCISE_LABELS_INSTRUCTION)
        .replace("{context}", context)
        .replace("{label}", label)
}

/// Generates a mind map for the preferences. Never fails: the fallback map
/// for the detected category is returned when the model output is unusable.
pub async fn generate_mind_map(llm: &dyn ChatModel, prefs: &CareerPreferences) -> GeneratedMap {
    let category = Category::resolve(prefs.category.as_deref(), &prefs.keyword_text());
    let prompt = build_mind_map_prompt(prefs);

    match request_mind_map(llm, &prompt).await {
        Ok(mind_map) => {
            info!(
                "Generated mind map with {} nodes via {}",
                mind_map.nodes.len(),
                llm.model_name()
            );
            GeneratedMap {
                mind_map,
                source: ResponseSource::Ai,
                category,
            }
        }
        Err(e) => {
            warn!(
                "Mind map generation failed ({e}); serving {} fallback",
                category.as_str()
            );
            GeneratedMap {
                mind_map: fallback_mind_map(category),
                source: ResponseSource::Fallback,
                category,
            }
        }
    }
}

async fn request_mind_map(llm: &dyn ChatModel, prompt: &str) -> Result<MindMap, LlmError> {
    let raw: Value = call_json(llm, prompt, CAREER_ADVISOR_SYSTEM).await?;
    normalize_mind_map(&raw)
        .filter(|m| !m.is_empty())
        .ok_or(LlmError::NoJson)
}

/// Children for one node, as a mind map fragment rooted at `parent_id`.
pub struct Expansion {
    pub nodes: Vec<MindMapNode>,
    pub edges: Vec<MindMapEdge>,
    pub source: ResponseSource,
}

/// Expands a node into at most `MAX_EXPANSION_CHILDREN` children with ids
/// `{parent_id}-{n}`, each linked from the parent.
pub async fn expand_node(
    llm: &dyn ChatModel,
    parent_id: &str,
    label: &str,
    context: Option<&str>,
) -> Expansion {
    let prompt = build_expand_prompt(label, context);

    let (labels, source) = match request_children(llm, &prompt).await {
        Ok(labels) => (labels, ResponseSource::Ai),
        Err(e) => {
            warn!("Node expansion for '{label}' failed ({e}); serving fallback");
            (fallback_expansion(label), ResponseSource::Fallback)
        }
    };

    let nodes: Vec<MindMapNode> = labels
        .into_iter()
        .take(MAX_EXPANSION_CHILDREN)
        .enumerate()
        .map(|(i, child)| MindMapNode::new(format!("{parent_id}-{}", i + 1), child))
        .collect();
    let edges = nodes
        .iter()
        .map(|n| MindMapEdge::new(parent_id, n.id.clone()))
        .collect();

    Expansion {
        nodes,
        edges,
        source,
    }
}

/// Accepts an array of nodes or `{nodes: [...]}`; labels go through the normalizer.
async fn request_children(llm: &dyn ChatModel, prompt: &str) -> Result<Vec<String>, LlmError> {
    let raw: Value = call_json(llm, prompt, CAREER_ADVISOR_SYSTEM).await?;

    let items: &[Value] = match &raw {
        Value::Array(items) => items,
        other => other
            .get("nodes")
            .or_else(|| other.get("children"))
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or(LlmError::NoJson)?,
    };

    let labels: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| normalize_node(item, i).data.label)
        .filter(|l| l != PLACEHOLDER_LABEL)
        .collect();

    if labels.is_empty() {
        return Err(LlmError::NoJson);
    }
    Ok(labels)
}
