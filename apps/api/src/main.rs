mod career;
mod config;
mod errors;
mod fallback;
mod llm_client;
mod mindmap;
mod models;
mod retry;
mod routes;
mod state;
mod store;

#[cfg(test)]
mod test_support;

use std::io::ErrorKind;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{ChatModel, OpenAiClient};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{FirestoreStore, InMemoryStore, MindMapStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Map API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm: Arc<dyn ChatModel> = Arc::new(
        OpenAiClient::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.openai_model.clone(),
            config.llm_retry,
        )
        .context("Failed to build LLM HTTP client")?,
    );
    info!(
        "LLM client initialized (model: {}, max attempts: {})",
        llm.model_name(),
        config.llm_retry.max_attempts
    );

    // Initialize document store
    let store: Arc<dyn MindMapStore> = match config.firestore.clone() {
        Some(firestore) => Arc::new(
            FirestoreStore::new(firestore).context("Failed to build Firestore HTTP client")?,
        ),
        None => {
            warn!("FIREBASE_PROJECT_ID not set; mind maps are kept in memory only");
            Arc::new(InMemoryStore::new())
        }
    };

    let state = AppState { llm, store };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let (listener, addr) = bind_with_retry(config.port, config.port_retry_attempts).await?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds `port`, moving on to the next port while the current one is taken.
/// Gives up after `attempts` ports; any error other than "address in use" is fatal.
async fn bind_with_retry(port: u16, attempts: u16) -> Result<(TcpListener, SocketAddr)> {
    let attempts = attempts.max(1);
    let mut offset = 0;
    let mut candidate = Some(port);

    while let Some(current) = candidate {
        let addr = SocketAddr::from(([0, 0, 0, 0], current));

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                let bound = listener.local_addr()?;
                return Ok((listener, bound));
            }
            Err(e) if e.kind() == ErrorKind::AddrInUse => {
                candidate = next_port(port, offset, attempts);
                match candidate {
                    Some(next) => warn!("Port {current} is in use, trying {next}"),
                    None => warn!("Port {current} is in use, giving up"),
                }
                offset += 1;
            }
            Err(e) => return Err(e).with_context(|| format!("Failed to bind {addr}")),
        }
    }

    anyhow::bail!("No free port in {port}..{}", port.saturating_add(attempts))
}

/// Port to try after attempt `offset` failed, or `None` once the budget or the port range is spent.
fn next_port(port: u16, offset: u16, attempts: u16) -> Option<u16> {
    if offset + 1 >= attempts {
        return None;
    }
    port.checked_add(offset + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Holds an ephemeral port whose successor was free a moment ago.
    async fn taken_port_with_free_successor() -> (TcpListener, u16) {
        for _ in 0..50 {
            let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
            let port = taken.local_addr().unwrap().port();
            let Some(next) = port.checked_add(1) else {
                continue;
            };
            if TcpListener::bind(("0.0.0.0", next)).await.is_ok() {
                return (taken, port);
            }
        }
        panic!("no ephemeral port with a free successor");
    }

    #[tokio::test]
    async fn test_bind_skips_port_in_use() {
        let (_taken, port) = taken_port_with_free_successor().await;

        let (_listener, addr) = bind_with_retry(port, 2).await.unwrap();
        assert_eq!(addr.port(), port + 1);
    }

    #[test]
    fn test_next_port_stops_at_budget() {
        assert_eq!(next_port(5000, 0, 3), Some(5001));
        assert_eq!(next_port(5000, 1, 3), Some(5002));
        assert_eq!(next_port(5000, 2, 3), None);
        assert_eq!(next_port(5000, 0, 1), None);
    }

    #[test]
    fn test_next_port_stops_at_range_end() {
        assert_eq!(next_port(u16::MAX, 0, 10), None);
        assert_eq!(next_port(u16::MAX - 1, 0, 10), Some(u16::MAX));
    }

    #[tokio::test]
    async fn test_bind_gives_up_after_attempts() {
        let taken = TcpListener::bind("0.0.0.0:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = bind_with_retry(port, 1).await.unwrap_err();
        assert!(err.to_string().contains("No free port"), "{err}");
    }
}
