//! Node Shape Normalizer: coerces whatever graph shape the model produced into `MindMap`.
//!
//! Models return labels as `data.label`, bare strings, arrays, or objects keyed
//! `name`/`title`/`text`/`value`. Clients only understand `{ id, data: { label } }`.

use serde_json::{Map, Value};

use crate::models::mind_map::{MindMap, MindMapEdge, MindMapNode, NodeData};

/// Label used when a node carries no usable text at all.
pub const PLACEHOLDER_LABEL: &str = "Untitled";

const LABEL_FIELDS: [&str; 4] = ["name", "title", "text", "value"];

/// Normalizes a parsed graph. Returns `None` when no node list can be found.
///
/// Accepts `{nodes, edges}`, the same wrapped in `mindMap` / `mind_map` / `graph`,
/// or a bare array of nodes.
pub fn normalize_mind_map(value: &Value) -> Option<MindMap> {
    let graph = ["mindMap", "mind_map", "graph"]
        .iter()
        .find_map(|key| value.get(key).filter(|v| v.is_object() || v.is_array()))
        .unwrap_or(value);

    let (nodes, edges) = match graph {
        Value::Array(nodes) => (nodes.as_slice(), &[][..]),
        Value::Object(map) => {
            let nodes = map.get("nodes")?.as_array()?;
            let edges = map
                .get("edges")
                .or_else(|| map.get("links"))
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            (nodes.as_slice(), edges)
        }
        _ => return None,
    };

    Some(MindMap {
        nodes: nodes
            .iter()
            .enumerate()
            .map(|(i, n)| normalize_node(n, i))
            .collect(),
        edges: edges.iter().filter_map(normalize_edge).collect(),
    })
}

/// Builds the canonical node, keeping unrelated fields such as `position`.
pub fn normalize_node(node: &Value, index: usize) -> MindMapNode {
    let label = node_label(node);
    let id = node
        .get("id")
        .and_then(scalar_string)
        .unwrap_or_else(|| format!("node-{index}"));

    let mut extra = Map::new();
    let mut data_extra = Map::new();

    if let Value::Object(map) = node {
        for (k, v) in map {
            match k.as_str() {
                "id" | "label" => {}
                "data" => {
                    if let Value::Object(data) = v {
                        data_extra.extend(
                            data.iter()
                                .filter(|(dk, _)| dk.as_str() != "label")
                                .map(|(dk, dv)| (dk.clone(), dv.clone())),
                        );
                    }
                }
                _ => {
                    extra.insert(k.clone(), v.clone());
                }
            }
        }
    }

    MindMapNode {
        id,
        data: NodeData {
            label,
            extra: data_extra,
        },
        extra,
    }
}

/// Derives a display label. Precedence:
/// `label` field, string itself, first string of an array,
/// `name`/`title`/`text`/`value`, the node id, then the placeholder.
pub fn node_label(node: &Value) -> String {
    sourced_label(node)
        .or_else(|| node.get("id").and_then(scalar_string))
        .unwrap_or_else(|| PLACEHOLDER_LABEL.to_string())
}

/// Tries `data.label`, then `label`, then `data`, then the node itself.
/// A source without usable text falls through to the next one.
fn sourced_label(node: &Value) -> Option<String> {
    let Value::Object(map) = node else {
        return label_from(node);
    };
    let data = map.get("data");

    data.and_then(|d| d.get("label"))
        .and_then(label_from)
        .or_else(|| map.get("label").and_then(label_from))
        .or_else(|| data.and_then(label_from))
        .or_else(|| label_from(node))
}

fn label_from(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => map
            .get("label")
            .and_then(non_blank)
            .or_else(|| LABEL_FIELDS.iter().find_map(|f| map.get(*f).and_then(non_blank))),
        Value::String(_) => non_blank(value),
        Value::Array(items) => items.iter().find_map(non_blank),
        _ => None,
    }
}

fn non_blank(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids may come back as strings or numbers.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn normalize_edge(edge: &Value) -> Option<MindMapEdge> {
    let map = edge.as_object()?;
    let source = map.get("source").or_else(|| map.get("from")).and_then(scalar_string)?;
    let target = map.get("target").or_else(|| map.get("to")).and_then(scalar_string)?;

    let mut normalized = MindMapEdge::new(source, target);
    if let Some(id) = map.get("id").and_then(scalar_string) {
        normalized.id = id;
    }
    normalized.extra = map
        .iter()
        .filter(|(k, _)| !matches!(k.as_str(), "id" | "source" | "target" | "from" | "to"))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();

    Some(normalized)
}
