//! Relay Index - Mirror-message index for a channel relay bot
//!
//! Maps source message ids to the ids of their re-posted copies so edits and
//! deletions can be propagated, bounded by a least recently used cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod relay;
pub mod tasks;

pub use api::AppState;
pub use cache::{MirrorIndex, RecencyCache};
pub use config::Config;
pub use error::CacheError;
pub use tasks::spawn_stats_reporter;
