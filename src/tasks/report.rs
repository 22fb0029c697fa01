//! Stats Reporter Task
//!
//! Background task that periodically logs mirror index statistics.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::SharedMirrorIndex;

/// Spawns a background task that logs index statistics every
/// `interval_secs` seconds.
///
/// A line is logged at `info` when anything changed since the previous tick
/// and at `debug` otherwise. Only the read half of the lock is taken.
///
/// # Returns
/// A JoinHandle for the spawned task, aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let index = MirrorIndex::new(250)?.into_shared();
/// let reporter = spawn_stats_reporter(index.clone(), 60);
/// // Later, during shutdown:
/// reporter.abort();
/// ```
pub fn spawn_stats_reporter(index: SharedMirrorIndex, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!(
            "Starting stats reporter with interval of {} seconds",
            interval.as_secs()
        );

        let mut previous = index.read().await.stats();

        loop {
            tokio::time::sleep(interval).await;

            let current = index.read().await.stats();

            if current != previous {
                info!(
                    entries = current.total_entries,
                    capacity = current.capacity,
                    hits = current.hits,
                    misses = current.misses,
                    writes = current.writes,
                    evictions = current.evictions,
                    hit_rate = current.hit_rate(),
                    "Mirror index stats"
                );
            } else {
                debug!("Mirror index stats unchanged");
            }

            previous = current;
        }
    })
}
