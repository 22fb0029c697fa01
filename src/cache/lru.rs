//! Recency Cache Module
//!
//! Fixed-capacity key-value store with least recently used eviction.

use std::collections::HashMap;
use std::fmt;
use std::iter::FusedIterator;

use crate::cache::entry::Entry;
use crate::error::{CacheError, Result};

// == Recency Cache ==
/// Bounded key-value store ordered by recency of use.
///
/// Entries live in an arena of slots and form a doubly linked chain through
/// slot indices:
/// - `head` = Most recently used
/// - `tail` = Least recently used
///
/// Write, read, membership and eviction are all O(1) on average. The arena
/// never holds more than `capacity` slots; freed slots are reused.
#[derive(Clone)]
pub struct RecencyCache<V> {
    /// Key to arena slot
    map: HashMap<String, usize>,
    /// Arena of entries; `None` marks a free slot
    slots: Vec<Option<Entry<V>>>,
    /// Free slot indices available for reuse
    free: Vec<usize>,
    /// Most recently used slot
    head: Option<usize>,
    /// Least recently used slot
    tail: Option<usize>,
    /// Number of live entries
    len: usize,
    /// Maximum number of live entries
    capacity: usize,
}

impl<V> RecencyCache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`CacheError::InvalidCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            map: HashMap::with_capacity(capacity),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            capacity,
        })
    }

    // == Write ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// An existing key keeps its slot, gets the new value and moves to the
    /// head without changing the count. A new key arriving while the cache is
    /// full first evicts the tail, which is returned to the caller.
    pub fn write(&mut self, key: impl Into<String>, value: V) -> Option<(String, V)> {
        let key = key.into();

        if let Some(&idx) = self.map.get(&key) {
            self.detach(idx);
            if let Some(entry) = self.slots[idx].as_mut() {
                entry.value = value;
            }
            self.attach_front(idx);
            return None;
        }

        let evicted = if self.len >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let idx = self.alloc(Entry::new(key.clone(), value));
        self.attach_front(idx);
        self.map.insert(key, idx);
        self.len += 1;

        evicted
    }

    // == Read ==
    /// Returns the value stored under `key`, promoting it to most recently
    /// used.
    ///
    /// Returns `None` on a miss. Reading the current head leaves the chain
    /// untouched.
    pub fn read(&mut self, key: &str) -> Option<&V> {
        let idx = *self.map.get(key)?;

        if self.head != Some(idx) {
            self.detach(idx);
            self.attach_front(idx);
        }

        self.slots[idx].as_ref().map(|entry| &entry.value)
    }

    // == Has ==
    /// Checks membership without affecting recency order.
    pub fn has(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    // == Peek LRU ==
    /// Returns the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&str, &V)> {
        let idx = self.tail?;
        self.slots[idx]
            .as_ref()
            .map(|entry| (entry.key.as_str(), &entry.value))
    }

    // == Clear ==
    /// Drops every entry.
    pub fn clear(&mut self) {
        self.map.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    // == Length ==
    /// Returns the number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Iter ==
    /// Iterates `(key, value)` pairs from most to least recently used.
    ///
    /// Borrowing the cache immutably, so iteration never changes recency.
    /// Every call starts a fresh pass from the head.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: &self.slots,
            cursor: self.head,
            remaining: self.len,
        }
    }

    // == Chain Maintenance ==
    /// Unlinks a slot from the chain, repairing neighbours and head/tail.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match self.slots[idx].as_mut() {
            Some(entry) => (entry.prev.take(), entry.next.take()),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_entry) = self.slots[prev_idx].as_mut() {
                    prev_entry.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_entry) = self.slots[next_idx].as_mut() {
                    next_entry.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Links a detached slot in as the new head.
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;

        if let Some(entry) = self.slots[idx].as_mut() {
            debug_assert!(entry.is_detached(), "attaching a linked entry");
            entry.next = old_head;
        }

        match old_head {
            Some(head_idx) => {
                if let Some(head_entry) = self.slots[head_idx].as_mut() {
                    head_entry.prev = Some(idx);
                }
            }
            None => self.tail = Some(idx),
        }

        self.head = Some(idx);
    }

    /// Removes the tail entry from chain, map and arena.
    fn evict_lru(&mut self) -> Option<(String, V)> {
        let idx = self.tail?;
        self.detach(idx);

        let entry = self.slots[idx].take()?;
        self.free.push(idx);
        self.map.remove(&entry.key);
        self.len -= 1;

        Some((entry.key, entry.value))
    }

    /// Places an entry in a free slot, growing the arena only when none is free.
    fn alloc(&mut self, entry: Entry<V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(entry);
                idx
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }

    // == Invariant Check ==
    /// Panics if chain, map and count disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert!(self.len <= self.capacity, "len exceeds capacity");
        assert!(self.slots.len() <= self.capacity, "arena grew past capacity");
        assert_eq!(self.map.len(), self.len, "map and count disagree");
        assert_eq!(self.head.is_none(), self.tail.is_none());
        assert_eq!(self.head.is_none(), self.len == 0);

        let forward: Vec<usize> = {
            let mut order = Vec::new();
            let mut cursor = self.head;
            while let Some(idx) = cursor {
                order.push(idx);
                assert!(order.len() <= self.len, "chain longer than count");
                cursor = self.slots[idx].as_ref().and_then(|e| e.next);
            }
            order
        };
        assert_eq!(forward.len(), self.len, "chain shorter than count");

        let mut backward = Vec::new();
        let mut cursor = self.tail;
        while let Some(idx) = cursor {
            backward.push(idx);
            assert!(backward.len() <= self.len, "reverse chain longer than count");
            cursor = self.slots[idx].as_ref().and_then(|e| e.prev);
        }
        backward.reverse();
        assert_eq!(forward, backward, "prev links do not mirror next links");

        for idx in forward {
            let entry = self.slots[idx].as_ref().expect("chain points at free slot");
            assert_eq!(self.map.get(&entry.key), Some(&idx), "map points elsewhere");
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for RecencyCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecencyCache")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("entries", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl<'a, V> IntoIterator for &'a RecencyCache<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// == Iterator ==
/// Recency-ordered iterator over a [`RecencyCache`].
pub struct Iter<'a, V> {
    slots: &'a [Option<Entry<V>>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, V> Clone for Iter<'a, V> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cursor?;
        let entry = self.slots[idx].as_ref()?;
        self.cursor = entry.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some((entry.key.as_str(), &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> {}

impl<'a, V> FusedIterator for Iter<'a, V> {}
