//! Fetcher Module
//!
//! The retrying request orchestrator. Resolves a logical request into typed
//! response data, transparently applying caching and retry-with-timeout:
//! consult the cache, and on a miss attempt the transport call up to the
//! configured number of times, each attempt bounded by the configured
//! timeout. Attempts are immediate retries; there is no backoff between them.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::cache::CacheStore;
use crate::client::key::{cache_key, request_url};
use crate::client::transport::{Transport, TransportResponse};
use crate::config::Config;
use crate::error::{FetchError, Result};

// == Fetcher ==
/// Request orchestrator combining a transport, a shared cache, and an
/// immutable configuration.
///
/// Both collaborators are injected at construction time: the cache so tests
/// can substitute their own store, the transport so the network itself can
/// be a test double.
pub struct Fetcher {
    /// Underlying transport, invoked once per attempt
    transport: Arc<dyn Transport>,
    /// Shared response cache
    cache: Arc<RwLock<CacheStore>>,
    /// Immutable request options
    config: Config,
}

impl Fetcher {
    // == Constructor ==
    /// Creates a new Fetcher from its collaborators.
    pub fn new(
        transport: Arc<dyn Transport>,
        cache: Arc<RwLock<CacheStore>>,
        config: Config,
    ) -> Self {
        Self {
            transport,
            cache,
            config,
        }
    }

    /// Shared handle to the underlying cache.
    pub fn cache(&self) -> Arc<RwLock<CacheStore>> {
        Arc::clone(&self.cache)
    }

    // == Request ==
    /// Resolves a logical request into a typed response.
    ///
    /// A fresh cached value short-circuits the transport entirely. Otherwise
    /// the call is attempted up to `retry_count` times; a timeout, a
    /// non-success status, and a body that does not deserialize into `T`
    /// each consume one attempt. On success the raw body is cached (when
    /// caching is enabled); a cache-write failure is logged and swallowed,
    /// never failing the request.
    ///
    /// # Errors
    /// Returns `FetchError::RetriesExhausted` once the attempt budget is
    /// spent. Failure is always a typed `Err`, never a sentinel value.
    pub async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        let key = cache_key(path, params);

        if self.config.cache_enabled {
            // Write lock: a read mutates stats and may evict lazily
            let mut cache = self.cache.write().await;
            if let Some(value) = cache.get(&key) {
                debug!(key = %key, "cache hit, skipping transport");
                return serde_json::from_value(value)
                    .map_err(|err| FetchError::MalformedResponse(err.to_string()));
            }
        }

        let url = request_url(&self.config.base_path, path, params);
        let mut last_error: Option<FetchError> = None;

        for attempt in 1..=self.config.retry_count {
            match self.attempt::<T>(&url).await {
                Ok((body, typed)) => {
                    if self.config.cache_enabled {
                        self.store_in_cache(&key, body).await;
                    }
                    return Ok(typed);
                }
                Err(err) => {
                    warn!(
                        attempt,
                        retry_count = self.config.retry_count,
                        error = %err,
                        "request attempt failed"
                    );
                    last_error = Some(err);
                }
            }
        }

        Err(FetchError::RetriesExhausted {
            attempts: self.config.retry_count,
            last_error: last_error
                .map_or_else(|| "no attempts were made".to_string(), |err| err.to_string()),
        })
    }

    // == Single Attempt ==
    /// Performs one transport call bounded by the configured timeout.
    ///
    /// An elapsed timeout drops the in-flight call future and is reported as
    /// a failed attempt of the same class as any other transport failure.
    async fn attempt<T: DeserializeOwned>(&self, url: &str) -> Result<(Value, T)> {
        let deadline = self.config.timeout();
        let response: TransportResponse = match timeout(deadline, self.transport.call(url)).await {
            Ok(outcome) => outcome?,
            Err(_) => {
                return Err(FetchError::TransportFailure(format!(
                    "timed out after {}ms",
                    deadline.as_millis()
                )))
            }
        };

        if !response.is_success() {
            return Err(FetchError::TransportFailure(format!(
                "unexpected status {}",
                response.status
            )));
        }

        let typed = serde_json::from_value(response.body.clone())
            .map_err(|err| FetchError::MalformedResponse(err.to_string()))?;

        Ok((response.body, typed))
    }

    // == Cache Fill ==
    /// Stores a successful response body, swallowing write failures.
    async fn store_in_cache(&self, key: &str, body: Value) {
        let mut cache = self.cache.write().await;
        if let Err(err) = cache.set(key.to_string(), body, self.config.cache_ttl()) {
            warn!(key = %key, error = %err, "cache write failed, continuing without caching");
        }
    }
}
