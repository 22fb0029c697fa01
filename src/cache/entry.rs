//! Cache Entry Module
//!
//! Defines the arena slot stored by the recency cache.

// == Entry ==
/// A single key-value pair plus its position in the recency chain.
///
/// Links are arena slot indices rather than references, so the chain has no
/// ownership cycles. Entries never leave the cache; callers only see keys and
/// values.
#[derive(Debug, Clone)]
pub(crate) struct Entry<V> {
    /// Source message id
    pub key: String,
    /// Stored value
    pub value: V,
    /// Slot of the next more recently used entry (towards head)
    pub prev: Option<usize>,
    /// Slot of the next less recently used entry (towards tail)
    pub next: Option<usize>,
}

impl<V> Entry<V> {
    // == Constructor ==
    /// Creates an unlinked entry.
    pub fn new(key: String, value: V) -> Self {
        Self {
            key,
            value,
            prev: None,
            next: None,
        }
    }

    // == Is Detached ==
    /// True when the entry has no neighbours.
    ///
    /// Holds for a fresh entry and for the only entry of a one-element chain.
    pub fn is_detached(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}
