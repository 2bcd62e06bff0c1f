use std::time::Duration;

use anyhow::{Context, Result};

use crate::llm_client::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use crate::retry::RetryPolicy;
use crate::store::firestore::FirestoreConfig;

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub openai_model: String,
    pub llm_retry: RetryPolicy,
    /// `None` when FIREBASE_PROJECT_ID is unset; the in-memory store is used instead.
    pub firestore: Option<FirestoreConfig>,
    pub port: u16,
    pub port_retry_attempts: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let firestore = get("FIREBASE_PROJECT_ID").map(|project_id| FirestoreConfig {
            project_id,
            collection: get("FIRESTORE_COLLECTION").unwrap_or_else(|| "mindmaps".to_string()),
            access_token: get("FIRESTORE_ACCESS_TOKEN"),
            emulator_host: get("FIRESTORE_EMULATOR_HOST"),
        });

        Ok(Config {
            openai_api_key: get("OPENAI_API_KEY")
                .context("Required environment variable 'OPENAI_API_KEY' is not set")?,
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            llm_retry: RetryPolicy::new(
                parse_or(get("LLM_MAX_ATTEMPTS"), 3, "LLM_MAX_ATTEMPTS")?,
                Duration::from_millis(parse_or(
                    get("LLM_INITIAL_DELAY_MS"),
                    1000,
                    "LLM_INITIAL_DELAY_MS",
                )?),
            ),
            firestore,
            port: parse_or(get("PORT"), 5000, "PORT")?,
            port_retry_attempts: parse_or(get("PORT_RETRY_ATTEMPTS"), 10, "PORT_RETRY_ATTEMPTS")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_or<T>(value: Option<String>, default: T, key: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(v) => v
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{v}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.port_retry_attempts, 10);
        assert_eq!(config.openai_model, DEFAULT_MODEL);
        assert_eq!(config.openai_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.llm_retry, RetryPolicy::default());
        assert!(config.firestore.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = config_from(&[]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));

        let err = config_from(&[("OPENAI_API_KEY", "  ")]).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = config_from(&[("OPENAI_API_KEY", "k"), ("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_firestore_enabled_by_project_id() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "k"),
            ("FIREBASE_PROJECT_ID", "career-app"),
            ("FIRESTORE_EMULATOR_HOST", "localhost:8080"),
        ])
        .unwrap();
        let fs = config.firestore.unwrap();
        assert_eq!(fs.project_id, "career-app");
        assert_eq!(fs.collection, "mindmaps");
        assert_eq!(fs.emulator_host.as_deref(), Some("localhost:8080"));
        assert!(fs.access_token.is_none());
    }

    #[test]
    fn test_retry_settings() {
        let config = config_from(&[
            ("OPENAI_API_KEY", "k"),
            ("LLM_MAX_ATTEMPTS", "5"),
            ("LLM_INITIAL_DELAY_MS", "250"),
        ])
        .unwrap();
        assert_eq!(config.llm_retry.max_attempts, 5);
        assert_eq!(config.llm_retry.initial_delay, Duration::from_millis(250));
    }
}
