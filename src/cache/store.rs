//! Mirror Index Module
//!
//! Maps source message ids to the ids of their mirrored copies, on top of the
//! recency cache, and keeps lookup statistics.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheStats, RecencyCache};
use crate::error::Result;

/// Index shared between request handlers and background tasks.
///
/// One lock guards the whole chain and map. Resolving promotes entries, so it
/// needs the write half.
pub type SharedMirrorIndex = Arc<RwLock<MirrorIndex>>;

// == Mirror Index ==
/// Source message id → mirrored message id, bounded by recency.
#[derive(Debug)]
pub struct MirrorIndex {
    /// Source id → mirror id
    mirrors: RecencyCache<String>,
    /// Lookup statistics
    stats: CacheStats,
}

impl MirrorIndex {
    // == Constructor ==
    /// Creates an empty index holding at most `capacity` mirrors.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            mirrors: RecencyCache::new(capacity)?,
            stats: CacheStats::new(capacity),
        })
    }

    /// Wraps the index for shared use across tasks.
    pub fn into_shared(self) -> SharedMirrorIndex {
        Arc::new(RwLock::new(self))
    }

    // == Record ==
    /// Remembers that `source` was mirrored as `mirror`.
    ///
    /// Recording an already known source replaces its mirror id.
    pub fn record(&mut self, source: impl Into<String>, mirror: impl Into<String>) {
        if let Some((evicted, _)) = self.mirrors.write(source, mirror.into()) {
            self.stats.record_eviction();
            debug!(source = %evicted, "Evicted least recently used mirror");
        }
        self.stats.record_write();
        self.stats.set_total_entries(self.mirrors.len());
    }

    // == Resolve ==
    /// Looks up the mirror of `source`, promoting it to most recently used.
    ///
    /// A miss means the message is not eligible for edit/delete propagation.
    pub fn resolve(&mut self, source: &str) -> Option<String> {
        if !self.mirrors.has(source) {
            self.stats.record_miss();
            debug!(source, "No mirror recorded for source message");
            return None;
        }

        let mirror = self.mirrors.read(source).cloned();
        self.stats.record_hit();
        mirror
    }

    // == Contains ==
    /// Checks for a recorded mirror without touching recency or stats.
    pub fn contains(&self, source: &str) -> bool {
        self.mirrors.has(source)
    }

    // == Entries ==
    /// Snapshot of the `limit` most recently used `(source, mirror)` pairs,
    /// most recent first.
    pub fn entries(&self, limit: usize) -> Vec<(String, String)> {
        self.mirrors
            .iter()
            .take(limit)
            .map(|(source, mirror)| (source.to_string(), mirror.clone()))
            .collect()
    }

    // == Clear ==
    /// Forgets every mirror and returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.mirrors.len();
        self.mirrors.clear();
        self.stats.set_total_entries(0);
        dropped
    }

    // == Stats ==
    /// Returns current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.mirrors.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.mirrors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mirrors.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.mirrors.capacity()
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        self.mirrors.assert_consistent();
    }
}
