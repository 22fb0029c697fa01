//! Cache Module
//!
//! Provides the recency cache and the mirror index built on it.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::{Iter, RecencyCache};
pub use stats::CacheStats;
pub use store::{MirrorIndex, SharedMirrorIndex};

// == Public Constants ==
/// Default number of mirrors kept for edit/delete propagation
pub const DEFAULT_CAPACITY: usize = 250;

/// Maximum accepted message id length in bytes
pub const MAX_ID_LENGTH: usize = 128;
