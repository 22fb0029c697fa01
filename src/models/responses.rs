//! Response DTOs for the index API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// A single source → mirror pair (GET /mirrors/:source, list items)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorResponse {
    /// Source message id
    pub source: String,
    /// Mirrored message id
    pub mirror: String,
}

impl MirrorResponse {
    pub fn new(source: impl Into<String>, mirror: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            mirror: mirror.into(),
        }
    }
}

/// Response body for the listing operation (GET /mirrors)
///
/// Mirrors are ordered most recently used first.
#[derive(Debug, Clone, Serialize)]
pub struct MirrorListResponse {
    /// Number of mirrors returned
    pub count: usize,
    /// Number of mirrors currently held
    pub total_entries: usize,
    /// Maximum number of mirrors held
    pub capacity: usize,
    pub mirrors: Vec<MirrorResponse>,
}

impl MirrorListResponse {
    pub fn new(mirrors: Vec<MirrorResponse>, total_entries: usize, capacity: usize) -> Self {
        Self {
            count: mirrors.len(),
            total_entries,
            capacity,
            mirrors,
        }
    }
}

/// Response body for the clear operation (DELETE /mirrors)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
    /// Number of mirrors dropped
    pub cleared: usize,
}

impl ClearResponse {
    pub fn new(cleared: usize) -> Self {
        Self {
            message: format!("Cleared {} mirrors", cleared),
            cleared,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: CacheStats,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            stats,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_list_counts() {
        let resp = MirrorListResponse::new(
            vec![MirrorResponse::new("a", "1"), MirrorResponse::new("b", "2")],
            5,
            250,
        );
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["total_entries"], 5);
        assert_eq!(json["mirrors"][0]["source"], "a");
        assert_eq!(json["mirrors"][1]["mirror"], "2");
    }

    #[test]
    fn test_clear_response_serialize() {
        let json = serde_json::to_string(&ClearResponse::new(3)).unwrap();
        assert!(json.contains("\"cleared\":3"));
        assert!(json.contains("Cleared 3 mirrors"));
    }

    #[test]
    fn test_stats_response_flattens_counters() {
        let mut stats = CacheStats::new(10);
        stats.record_hit();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();
        assert_eq!(json["hits"], 3);
        assert_eq!(json["misses"], 1);
        assert_eq!(json["capacity"], 10);
        assert!((json["hit_rate"].as_f64().unwrap() - 0.75).abs() < 0.001);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
