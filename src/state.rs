//! Runtime State Module
//!
//! Consumer-side state holder mutated only by the load operation and read
//! by the caller after completion.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::client::Fetcher;
use crate::derive::{display_names, filter_active};
use crate::models::ItemsPayload;

// == Runtime State ==
/// Tracks the outcome of the most recent load.
#[derive(Debug, Clone, Default)]
pub struct RuntimeState {
    /// True only while a load is in flight
    pub loading: bool,
    /// Error message from the last load, if it failed
    pub error: Option<String>,
    /// Display-formatted names derived from the fetched items
    pub data: Vec<String>,
    /// Timestamp of the last successful load
    pub last_updated: Option<DateTime<Utc>>,
}

impl RuntimeState {
    /// Creates a fresh state with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    // == Load ==
    /// Fetches the item list and derives the display view into `data`.
    ///
    /// On success, `data` holds the filtered display names and
    /// `last_updated` is stamped. On failure, `error` records the message
    /// and `data` is cleared. `loading` is never left set after a terminal
    /// outcome.
    pub async fn load(&mut self, fetcher: &Fetcher, path: &str, min_score: Option<f64>) {
        self.loading = true;
        self.error = None;

        match fetcher.request::<ItemsPayload>(path, &[]).await {
            Ok(payload) => {
                let active = filter_active(&payload.items, min_score);
                info!(
                    fetched = payload.items.len(),
                    kept = active.len(),
                    "item load complete"
                );
                self.data = display_names(&active);
                self.last_updated = Some(Utc::now());
            }
            Err(err) => {
                error!(error = %err, "item load failed");
                self.error = Some(err.to_string());
                self.data.clear();
            }
        }

        self.loading = false;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;
    use crate::client::{Transport, TransportResponse};
    use crate::config::Config;
    use crate::error::{FetchError, Result};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::RwLock;

    struct FixedTransport {
        outcome: std::result::Result<Value, ()>,
    }

    #[async_trait]
    impl Transport for FixedTransport {
        async fn call(&self, _url: &str) -> Result<TransportResponse> {
            match &self.outcome {
                Ok(body) => Ok(TransportResponse {
                    status: 200,
                    body: body.clone(),
                }),
                Err(()) => Err(FetchError::TransportFailure("connection refused".into())),
            }
        }
    }

    fn fetcher_with(outcome: std::result::Result<Value, ()>) -> Fetcher {
        let config = Config {
            base_path: "http://test.local/api".to_string(),
            timeout_ms: 1000,
            retry_count: 2,
            cache_enabled: false,
            cache_ttl_secs: 60,
        };
        Fetcher::new(
            Arc::new(FixedTransport { outcome }),
            Arc::new(RwLock::new(CacheStore::new())),
            config,
        )
    }

    #[tokio::test]
    async fn test_load_success_populates_data() {
        let body = json!({
            "items": [
                {"id": 1, "name": "alpha", "active": true, "score": 10.0},
                {"id": 2, "name": "beta", "active": false, "score": 9.0}
            ]
        });
        let fetcher = fetcher_with(Ok(body));
        let mut state = RuntimeState::new();

        state.load(&fetcher, "/items", None).await;

        assert!(!state.loading);
        assert!(state.error.is_none());
        assert_eq!(state.data, vec!["ALPHA (#1)"]);
        assert!(state.last_updated.is_some());
    }

    #[tokio::test]
    async fn test_load_failure_records_error_and_clears_loading() {
        let fetcher = fetcher_with(Err(()));
        let mut state = RuntimeState::new();
        state.data = vec!["stale".to_string()];

        state.load(&fetcher, "/items", None).await;

        assert!(!state.loading, "loading must be cleared after a terminal outcome");
        let message = state.error.expect("error should be recorded");
        assert!(message.contains("attempts failed"));
        assert!(state.data.is_empty());
    }

    #[tokio::test]
    async fn test_load_applies_score_threshold() {
        let body = json!({
            "items": [
                {"id": 1, "name": "alpha", "active": true, "score": 10.0},
                {"id": 2, "name": "beta", "active": true, "score": 2.0},
                {"id": 3, "name": "gamma", "active": false, "score": 9.0}
            ]
        });
        let fetcher = fetcher_with(Ok(body));
        let mut state = RuntimeState::new();

        state.load(&fetcher, "/items", Some(3.0)).await;

        assert_eq!(state.data, vec!["ALPHA (#1)"]);
    }

    #[tokio::test]
    async fn test_reload_after_failure_clears_error() {
        let body = json!({"items": [{"id": 1, "name": "alpha", "active": true}]});

        let mut state = RuntimeState::new();
        state.load(&fetcher_with(Err(())), "/items", None).await;
        assert!(state.error.is_some());

        state.load(&fetcher_with(Ok(body)), "/items", None).await;
        assert!(state.error.is_none());
        assert_eq!(state.data, vec!["ALPHA (#1)"]);
    }
}
