//! Client Module
//!
//! The retrying request orchestrator and its collaborators.
//!
//! # Parts
//! - `Transport` - abstract seam over the network, one call per attempt
//! - `Fetcher` - cache consult, bounded retry loop, per-attempt timeout
//! - key construction - canonical cache keys and request URLs

pub mod fetcher;
pub mod key;
pub mod transport;

pub use fetcher::Fetcher;
pub use key::{cache_key, request_url};
pub use transport::{HttpTransport, Transport, TransportResponse};
