//! Error types for the item loader
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Unified error type for the cache and request orchestrator.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Malformed cache key or non-positive TTL
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-success status, connection error, or per-attempt timeout
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// Successful call whose body does not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// All attempts failed; terminal for the request
    #[error("All {attempts} attempts failed, last error: {last_error}")]
    RetriesExhausted { attempts: u32, last_error: String },
}

// == Result Type Alias ==
/// Convenience Result type for the item loader.
pub type Result<T> = std::result::Result<T, FetchError>;
