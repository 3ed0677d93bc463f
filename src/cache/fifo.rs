//! Insertion Order Module
//!
//! Tracks first-insertion order of keys for FIFO eviction.

use std::collections::VecDeque;

// == Insertion Order ==
/// Tracks the order in which keys were first inserted.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest inserted (next eviction victim)
/// - Back = Newest inserted
///
/// Reads and overwrites never change a key's position; only the first
/// insertion of a key records it.
#[derive(Debug, Default)]
pub struct InsertionOrder {
    /// Keys in first-insertion order
    order: VecDeque<String>,
}

impl InsertionOrder {
    // == Constructor ==
    /// Creates a new empty insertion tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record ==
    /// Records a newly inserted key at the back of the queue.
    ///
    /// Callers only invoke this for keys not already tracked; overwriting
    /// an existing key must keep its original position.
    pub fn record(&mut self, key: &str) {
        self.order.push_back(key.to_string());
    }

    // == Remove ==
    /// Removes a key from the tracker.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Returns and removes the oldest-inserted key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the oldest-inserted key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&String> {
        self.order.front()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    #[allow(dead_code)]
    pub fn contains(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key)
    }

    // == Clear ==
    /// Drops all tracked keys.
    pub fn clear(&mut self) {
        self.order.clear();
    }
}
