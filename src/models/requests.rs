//! Request DTOs for the index API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

/// Query parameters for the listing operation (GET /mirrors)
///
/// # Fields
/// - `limit`: Only return the `limit` most recently used mirrors
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Number of entries to return out of `available`.
    pub fn effective_limit(&self, available: usize) -> usize {
        self.limit.map_or(available, |limit| limit.min(available))
    }
}
