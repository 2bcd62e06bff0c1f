//! Firestore-backed store over the REST v1 API.
//!
//! Documents are written with typed Firestore values, so plain JSON is
//! converted on the way in (`encode_fields`) and out (`decode_fields`).

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::mind_map::{MindMapRecord, NewMindMap};

use super::{MindMapStore, StoreError, MAX_LIST_LIMIT};

const FIRESTORE_API: &str = "https://firestore.googleapis.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub collection: String,
    /// OAuth bearer token. The emulator accepts requests without one.
    pub access_token: Option<String>,
    /// `host:port` of a local emulator; switches to plain HTTP.
    pub emulator_host: Option<String>,
}

pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        info!(
            "Firestore store: project={} collection={} emulator={}",
            config.project_id,
            config.collection,
            config.emulator_host.as_deref().unwrap_or("none")
        );
        Ok(Self { client, config })
    }

    /// `.../projects/{p}/databases/(default)/documents`
    fn documents_url(&self) -> String {
        let api = match &self.config.emulator_host {
            Some(host) => format!("http://{}/v1", host.trim_end_matches('/')),
            None => FIRESTORE_API.to_string(),
        };
        format!(
            "{api}/projects/{}/databases/(default)/documents",
            self.config.project_id
        )
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.documents_url(), self.config.collection)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct RunQueryItem {
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

async fn api_error(response: Response) -> StoreError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    StoreError::Api { status, message }
}

impl Document {
    fn into_record(self) -> Result<MindMapRecord, StoreError> {
        let mut fields = decode_fields(&self.fields)?;
        if !fields.contains_key("id") {
            // Last path segment of `projects/.../documents/{collection}/{id}`
            let id = self.name.rsplit('/').next().unwrap_or_default();
            fields.insert("id".to_string(), Value::String(id.to_string()));
        }
        Ok(serde_json::from_value(Value::Object(fields))?)
    }
}

#[async_trait]
impl MindMapStore for FirestoreStore {
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

        let fields = match serde_json::to_value(&record)? {
            Value::Object(map) => encode_fields(&map),
            _ => return Err(StoreError::Decode("record is not an object".to_string())),
        };

        let response = self
            .authorize(self.client.post(self.collection_url()))
            .query(&[("documentId", record.id.as_str())])
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        debug!("Saved mind map {} to Firestore", record.id);
        Ok(record)
    }

    async fn get(&self, id: &str) -> Result<Option<MindMapRecord>, StoreError> {
        let url = format!("{}/{}", self.collection_url(), id);
        let response = self.authorize(self.client.get(url)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let document: Document = response.json().await?;
        document.into_record().map(Some)
    }

    async fn list_for_user(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<MindMapRecord>, StoreError> {
        // Equality filter only: ordering by createdAt here would need a composite index.
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": self.config.collection }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "userId" },
                        "op": "EQUAL",
                        "value": { "stringValue": user_id }
                    }
                }
            }
        });

        let url = format!("{}:runQuery", self.documents_url());
        let response = self
            .authorize(self.client.post(url))
            .json(&query)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let items: Vec<RunQueryItem> = response.json().await?;
        let mut records = items
            .into_iter()
            .filter_map(|item| item.document)
            .map(Document::into_record)
            .collect::<Result<Vec<_>, _>>()?;

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(limit.min(MAX_LIST_LIMIT));
        Ok(records)
    }

    fn backend(&self) -> &'static str {
        "firestore"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// JSON <-> Firestore typed value codec
// ────────────────────────────────────────────────────────────────────────────

pub fn encode_fields(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect()
}

pub fn encode_value(value: &Value) -> Value {
    match value {
        Value::Null => json!({ "nullValue": null }),
        Value::Bool(b) => json!({ "booleanValue": b }),
        Value::Number(n) => match n.as_i64() {
            // integerValue is an int64 carried as a string
            Some(i) => json!({ "integerValue": i.to_string() }),
            None => json!({ "doubleValue": n.as_f64() }),
        },
        Value::String(s) => json!({ "stringValue": s }),
        Value::Array(items) => json!({
            "arrayValue": { "values": items.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        Value::Object(map) => json!({ "mapValue": { "fields": encode_fields(map) } }),
    }
}

pub fn decode_fields(fields: &Map<String, Value>) -> Result<Map<String, Value>, StoreError> {
    fields
        .iter()
        .map(|(k, v)| Ok((k.clone(), decode_value(v)?)))
        .collect()
}

pub fn decode_value(value: &Value) -> Result<Value, StoreError> {
    let map = value
        .as_object()
        .ok_or_else(|| StoreError::Decode(format!("expected typed value, got {value}")))?;
    let (kind, inner) = map
        .iter()
        .next()
        .ok_or_else(|| StoreError::Decode("empty typed value".to_string()))?;

    match kind.as_str() {
        "nullValue" => Ok(Value::Null),
        "booleanValue" | "doubleValue" | "geoPointValue" => Ok(inner.clone()),
        "stringValue" | "timestampValue" | "referenceValue" | "bytesValue" => Ok(inner.clone()),
        "integerValue" => {
            let parsed = match inner {
                Value::String(s) => s.parse::<i64>().ok(),
                Value::Number(n) => n.as_i64(),
                _ => None,
            };
            parsed
                .map(Value::from)
                .ok_or_else(|| StoreError::Decode(format!("bad integerValue {inner}")))
        }
        "arrayValue" => {
            let values = inner
                .get("values")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            Ok(Value::Array(
                values.iter().map(decode_value).collect::<Result<_, _>>()?,
            ))
        }
        "mapValue" => {
            let empty = Map::new();
            let fields = inner
                .get("fields")
                .and_then(Value::as_object)
                .unwrap_or(&empty);
            Ok(Value::Object(decode_fields(fields)?))
        }
        other => Err(StoreError::Decode(format!("unsupported value type {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mind_map::{MindMap, MindMapEdge, MindMapNode, ResponseSource};

    fn store(emulator: Option<&str>) -> FirestoreStore {
        FirestoreStore::new(FirestoreConfig {
            project_id: "career-app".to_string(),
            collection: "mindmaps".to_string(),
            access_token: None,
            emulator_host: emulator.map(str::to_string),
        })
        .unwrap()
    }

    #[test]
    fn test_production_urls() {
        let s = store(None);
        assert_eq!(
            s.collection_url(),
            "https://firestore.googleapis.com/v1/projects/career-app/databases/(default)/documents/mindmaps"
        );
    }

    #[test]
    fn test_emulator_urls() {
        let s = store(Some("localhost:8080/"));
        assert_eq!(
            s.documents_url(),
            "http://localhost:8080/v1/projects/career-app/databases/(default)/documents"
        );
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(encode_value(&json!(null)), json!({"nullValue": null}));
        assert_eq!(encode_value(&json!(true)), json!({"booleanValue": true}));
        assert_eq!(encode_value(&json!(42)), json!({"integerValue": "42"}));
        assert_eq!(encode_value(&json!(1.5)), json!({"doubleValue": 1.5}));
        assert_eq!(encode_value(&json!("hi")), json!({"stringValue": "hi"}));
    }

    #[test]
    fn test_encode_nested() {
        let encoded = encode_value(&json!({"tags": ["a"], "pos": {"x": 1}}));
        assert_eq!(
            encoded,
            json!({"mapValue": {"fields": {
                "tags": {"arrayValue": {"values": [{"stringValue": "a"}]}},
                "pos": {"mapValue": {"fields": {"x": {"integerValue": "1"}}}}
            }}})
        );
    }

    #[test]
    fn test_decode_handles_firestore_omissions() {
        // Firestore omits `values` / `fields` for empty arrays and maps.
        assert_eq!(decode_value(&json!({"arrayValue": {}})).unwrap(), json!([]));
        assert_eq!(decode_value(&json!({"mapValue": {}})).unwrap(), json!({}));
        assert_eq!(
            decode_value(&json!({"timestampValue": "2024-01-01T00:00:00Z"})).unwrap(),
            json!("2024-01-01T00:00:00Z")
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_value(&json!("raw")).is_err());
        assert!(decode_value(&json!({})).is_err());
        assert!(decode_value(&json!({"integerValue": "many"})).is_err());
        assert!(decode_value(&json!({"mysteryValue": 1})).is_err());
    }

    #[test]
    fn test_record_survives_document_encoding() {
        let mut map = MindMap::default();
        map.nodes.push(MindMapNode::new("root", "Tech"));
        map.nodes.push(MindMapNode::new("1", "Developer"));
        map.edges.push(MindMapEdge::new("root", "1"));

        let record = MindMapRecord {
            id: "abc".to_string(),
            user_id: Some("u1".to_string()),
            title: "Tech".to_string(),
            mind_map: map,
            source: ResponseSource::Fallback,
            preferences: json!({"interests": ["coding"], "goals": null}),
            created_at: Utc::now(),
        };

        let Value::Object(plain) = serde_json::to_value(&record).unwrap() else {
            panic!("record must serialize to an object");
        };
        let mut fields = encode_fields(&plain);
        fields.remove("id");

        let document = Document {
            name: "projects/p/databases/(default)/documents/mindmaps/abc".to_string(),
            fields,
        };
        assert_eq!(document.into_record().unwrap(), record);
    }
}
