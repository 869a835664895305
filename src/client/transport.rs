//! Transport Module
//!
//! The seam between the orchestrator and the network. The orchestrator only
//! requires that a transport can fail, can be cancelled by dropping its
//! future, and returns a status plus a structured body.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{FetchError, Result};

// == Transport Response ==
/// Raw outcome of a single transport call.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP-style status code
    pub status: u16,
    /// Response body as structured data
    pub body: Value,
}

impl TransportResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

// == Transport Trait ==
/// Abstract transport invoked once per attempt.
///
/// Cancellation contract: the orchestrator enforces its per-attempt timeout
/// by dropping the future returned by `call`; implementations must not
/// require explicit teardown beyond that.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn call(&self, url: &str) -> Result<TransportResponse>;
}

// == HTTP Transport ==
/// Concrete transport over a reused `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Creates a new HttpTransport with a fresh client.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn call(&self, url: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| FetchError::TransportFailure(err.to_string()))?;

        let status = response.status().as_u16();
        // A non-JSON body surfaces as Null and fails shape validation
        // downstream; error-status bodies are never inspected anyway.
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok(TransportResponse { status, body })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_success_range() {
        let ok = TransportResponse {
            status: 200,
            body: json!({}),
        };
        assert!(ok.is_success());

        let created = TransportResponse {
            status: 201,
            body: json!({}),
        };
        assert!(created.is_success());

        let redirect = TransportResponse {
            status: 301,
            body: json!({}),
        };
        assert!(!redirect.is_success());

        let server_error = TransportResponse {
            status: 500,
            body: json!({}),
        };
        assert!(!server_error.is_success());
    }

    #[tokio::test]
    async fn test_http_transport_connection_refused() {
        let transport = HttpTransport::new();

        // Nothing listens on this port; the call must fail, not panic
        let result = transport.call("http://127.0.0.1:1/items").await;
        assert!(matches!(result, Err(FetchError::TransportFailure(_))));
    }
}
