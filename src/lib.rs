//! Item Loader - a cached, retrying item-fetch client
//!
//! Fetches a list of items from an endpoint through a retrying request
//! orchestrator backed by an in-memory TTL cache, and derives a filtered,
//! summarized view for display.

pub mod cache;
pub mod client;
pub mod config;
pub mod derive;
pub mod error;
pub mod models;
pub mod state;

pub use client::{Fetcher, HttpTransport, Transport};
pub use config::Config;
pub use error::{FetchError, Result};
pub use state::RuntimeState;
