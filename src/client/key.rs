//! Cache Key Module
//!
//! Deterministic cache-key and URL construction for logical requests.
//! Params are sorted before serialization so that semantically equal
//! param sets always map to the same key, regardless of call-site order.

// == Cache Key ==
/// Builds the canonical cache key for a path and its query params.
///
/// # Arguments
/// * `path` - The logical request path, e.g. "/items"
/// * `params` - Query parameters as key-value pairs, in any order
pub fn cache_key(path: &str, params: &[(String, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let mut sorted = params.to_vec();
    sorted.sort();

    let query: Vec<String> = sorted
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect();

    format!("{}?{}", path, query.join("&"))
}

// == Request URL ==
/// Builds the full request URL from the base path and the canonical key.
///
/// The canonical query is reused so the URL is deterministic too.
pub fn request_url(base_path: &str, path: &str, params: &[(String, String)]) -> String {
    format!("{}{}", base_path.trim_end_matches('/'), cache_key(path, params))
}
