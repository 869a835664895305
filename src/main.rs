//! Item Loader - demo binary
//!
//! Loads the item list twice through the cached, retrying fetcher and
//! prints the derived view. The transport here is simulated: a stand-in
//! for any real endpoint, with a little latency and one scripted
//! transient failure so the retry path is visible in the logs.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use item_loader::cache::CacheStore;
use item_loader::client::{Fetcher, Transport, TransportResponse};
use item_loader::config::Config;
use item_loader::derive::summarize;
use item_loader::models::ItemsPayload;
use item_loader::state::RuntimeState;

// == Simulated Transport ==
/// Stand-in endpoint: small artificial delay, one transient failure on the
/// first call, canned items afterwards.
struct SimulatedTransport {
    calls: AtomicU32,
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn call(&self, _url: &str) -> item_loader::Result<TransportResponse> {
        tokio::time::sleep(Duration::from_millis(80)).await;

        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Ok(TransportResponse {
                status: 503,
                body: Value::Null,
            });
        }

        Ok(TransportResponse {
            status: 200,
            body: json!({
                "items": [
                    { "id": 1, "name": "alpha", "active": true,  "score": 10.0 },
                    { "id": 2, "name": "beta",  "active": true,  "score": 2.0 },
                    { "id": 3, "name": "gamma", "active": false, "score": 9.0 },
                    { "id": 4, "name": "delta", "active": true }
                ]
            }),
        })
    }
}

/// Main entry point for the item loader demo.
///
/// # Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache store and fetcher with a simulated transport
/// 4. Load the item list twice - the second run is served from cache
/// 5. Print the derived names, summary, and cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "item_loader=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting item loader demo");

    let config = Config::from_env();
    info!(
        "Configuration loaded: base_path={}, timeout={}ms, retry_count={}, cache_enabled={}, cache_ttl={}s",
        config.base_path, config.timeout_ms, config.retry_count, config.cache_enabled, config.cache_ttl_secs
    );

    let cache = Arc::new(RwLock::new(CacheStore::new()));
    let transport = Arc::new(SimulatedTransport {
        calls: AtomicU32::new(0),
    });
    let fetcher = Fetcher::new(transport, Arc::clone(&cache), config);

    let mut state = RuntimeState::new();

    // First load: the scripted transient failure forces a retry
    state.load(&fetcher, "/items", Some(3.0)).await;
    if let Some(err) = &state.error {
        anyhow::bail!("initial load failed: {err}");
    }
    println!("Loaded items: {:?}", state.data);

    // Second load: served from cache, no transport calls
    state.load(&fetcher, "/items", Some(3.0)).await;
    println!("Reloaded items: {:?}", state.data);

    // The summary request hits the same cache entry
    let payload: ItemsPayload = fetcher
        .request("/items", &[])
        .await
        .context("summary fetch failed")?;
    let summary = summarize(&payload.items);
    println!(
        "Summary: {}",
        serde_json::to_string(&summary).context("summary serialization failed")?
    );

    let stats = cache.read().await.stats();
    println!(
        "Cache stats: {}",
        serde_json::to_string(&stats).context("stats serialization failed")?
    );

    info!("Demo complete");
    Ok(())
}
