//! API Handlers
//!
//! HTTP request handlers for each index service endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::cache::{MirrorIndex, SharedMirrorIndex};
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, HealthResponse, ListQuery, MirrorListResponse, MirrorResponse, StatsResponse,
};
use crate::relay::{self, validate_id, RelayAction, RelayEvent};

/// Application state shared across all handlers.
///
/// Holds the one mirror index of the process.
#[derive(Clone)]
pub struct AppState {
    pub index: SharedMirrorIndex,
}

impl AppState {
    /// Creates a new AppState owning the given index.
    pub fn new(index: MirrorIndex) -> Self {
        Self {
            index: index.into_shared(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured capacity is zero.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(MirrorIndex::new(config.mirror_capacity)?))
    }
}

/// Handler for POST /events
///
/// Applies a relay event and returns what the caller should do.
pub async fn event_handler(
    State(state): State<AppState>,
    Json(event): Json<RelayEvent>,
) -> Result<Json<RelayAction>> {
    event.validate()?;

    let mut index = state.index.write().await;
    Ok(Json(relay::apply(&mut index, event)))
}

/// Handler for GET /mirrors
///
/// Lists mirrors most recently used first without promoting any of them.
pub async fn list_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<MirrorListResponse> {
    let index = state.index.read().await;
    let limit = query.effective_limit(index.len());

    let mirrors = index
        .entries(limit)
        .into_iter()
        .map(|(source, mirror)| MirrorResponse::new(source, mirror))
        .collect();

    Json(MirrorListResponse::new(
        mirrors,
        index.len(),
        index.capacity(),
    ))
}

/// Handler for GET /mirrors/:source
///
/// Resolves one mirror, promoting it to most recently used.
pub async fn resolve_handler(
    State(state): State<AppState>,
    Path(source): Path<String>,
) -> Result<Json<MirrorResponse>> {
    validate_id("source", &source)?;

    // Write lock: resolving promotes the entry and updates stats
    let mut index = state.index.write().await;
    match index.resolve(&source) {
        Some(mirror) => Ok(Json(MirrorResponse::new(source, mirror))),
        None => Err(CacheError::NotFound(source)),
    }
}

/// Handler for DELETE /mirrors
///
/// Drops every recorded mirror.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.index.write().await.clear();
    tracing::info!(cleared, "Mirror index cleared");

    Json(ClearResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.index.read().await.stats();
    Json(StatsResponse::from(stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_ok;

    fn state() -> AppState {
        AppState::new(MirrorIndex::new(3).unwrap())
    }

    fn mirrored(source: &str, mirror: &str) -> RelayEvent {
        RelayEvent::Mirrored {
            source: source.to_string(),
            mirror: mirror.to_string(),
        }
    }

    #[tokio::test]
    async fn test_event_then_resolve() {
        let state = state();

        let action = assert_ok!(event_handler(State(state.clone()), Json(mirrored("src", "dst"))).await);
        assert_eq!(action.0, RelayAction::Recorded);

        let response = assert_ok!(resolve_handler(State(state), Path("src".to_string())).await);
        assert_eq!(response.mirror, "dst");
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let result = resolve_handler(State(state()), Path("nope".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_event_invalid_ids() {
        let result = event_handler(State(state()), Json(mirrored("src", ""))).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_event_after_eviction_skips() {
        let state = state();
        for (source, mirror) in [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")] {
            event_handler(State(state.clone()), Json(mirrored(source, mirror)))
                .await
                .unwrap();
        }

        let action = assert_ok!(
            event_handler(
                State(state),
                Json(RelayEvent::Deleted {
                    source: "a".to_string(),
                }),
            )
            .await
        );
        assert_eq!(action.0, RelayAction::Skip);
    }

    #[tokio::test]
    async fn test_list_with_limit() {
        let state = state();
        for (source, mirror) in [("a", "1"), ("b", "2"), ("c", "3")] {
            state.index.write().await.record(source, mirror);
        }

        let response = list_handler(State(state), Query(ListQuery { limit: Some(2) })).await;
        assert_eq!(response.count, 2);
        assert_eq!(response.total_entries, 3);
        assert_eq!(response.mirrors[0], MirrorResponse::new("c", "3"));
        assert_eq!(response.mirrors[1], MirrorResponse::new("b", "2"));
    }

    #[tokio::test]
    async fn test_clear_and_stats() {
        let state = state();
        state.index.write().await.record("a", "1");

        let cleared = clear_handler(State(state.clone())).await;
        assert_eq!(cleared.cleared, 1);

        let stats = stats_handler(State(state)).await;
        assert_eq!(stats.stats.total_entries, 0);
        assert_eq!(stats.stats.writes, 1);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
