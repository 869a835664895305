//! Summary DTO
//!
//! Aggregate counts derived from a fetched item list.

use serde::Serialize;

/// Aggregate view over a sequence of items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemSummary {
    /// Total number of items
    pub total: usize,
    /// Number of active items
    pub active: usize,
    /// Highest score present, if any item carries one
    pub max_score: Option<f64>,
}
