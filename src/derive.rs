//! Item Derivation Module
//!
//! Pure helpers that turn a fetched item list into the filtered and
//! summarized view used for display. All functions are total and
//! order-preserving relative to input order, except for the explicit
//! descending-by-score sort.

use crate::models::{Item, ItemSummary};

// == Filter ==
/// Returns the items passing the activity predicate.
///
/// An item passes when `active` is true and, if a threshold is given, its
/// score is strictly greater than the threshold. Items without a score
/// fail any threshold. Input order is preserved.
pub fn filter_active(items: &[Item], min_score: Option<f64>) -> Vec<Item> {
    items
        .iter()
        .filter(|item| {
            item.active
                && min_score.map_or(true, |threshold| {
                    item.score.map_or(false, |score| score > threshold)
                })
        })
        .cloned()
        .collect()
}

// == Sort ==
/// Sorts items in place by descending score; scoreless items sort last.
///
/// The sort is stable, so items with equal scores keep their input order.
pub fn sort_by_score_desc(items: &mut [Item]) {
    items.sort_by(|a, b| {
        let score_a = a.score.unwrap_or(f64::NEG_INFINITY);
        let score_b = b.score.unwrap_or(f64::NEG_INFINITY);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

// == Display Projection ==
/// Formats items for display: uppercased name tagged with the id.
pub fn display_names(items: &[Item]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("{} (#{})", item.name.to_uppercase(), item.id))
        .collect()
}

// == Summary ==
/// Builds aggregate counts: total, active count, and the maximum score.
pub fn summarize(items: &[Item]) -> ItemSummary {
    let max_score = items
        .iter()
        .filter_map(|item| item.score)
        .fold(None, |best: Option<f64>, score| {
            Some(best.map_or(score, |current| current.max(score)))
        });

    ItemSummary {
        total: items.len(),
        active: items.iter().filter(|item| item.active).count(),
        max_score,
    }
}
