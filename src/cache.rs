// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded cache of result lists, keyed by normalized query.
//!
//! Eviction is FIFO and bulk: when full, the oldest fifth of the entries go
//! at once, so a burst of new queries doesn't pay one eviction per insert.
//! Reads never reorder entries, and updating an existing key keeps its slot.
//!
//! The cache itself is not synchronized. `SearchEngine` keeps it behind a
//! `parking_lot::Mutex`.

use std::collections::{HashMap, VecDeque};

use crate::types::CacheStats;
use crate::utils::{char_len, normalize};

/// Shortest normalized query worth caching.
pub const MIN_KEY_LEN: usize = 2;

/// Insertion-ordered cache of result lists.
#[derive(Debug, Clone)]
pub struct ResultCache<V> {
    entries: HashMap<String, Vec<V>>,
    /// Keys, oldest first.
    order: VecDeque<String>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<V: Clone> ResultCache<V> {
    /// An empty cache holding at most `capacity` queries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
            hits: 0,
            misses: 0,
        }
    }

    /// Cached results for `query`, counting a hit or a miss.
    ///
    /// Queries too short to cache are neither hits nor misses.
    pub fn get(&mut self, query: &str) -> Option<Vec<V>> {
        let key = cache_key(query)?;
        match self.entries.get(&key) {
            Some(results) => {
                self.hits += 1;
                Some(results.clone())
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Store results for `query`. Short keys and empty lists are ignored.
    pub fn put(&mut self, query: &str, results: Vec<V>) {
        let Some(key) = cache_key(query) else {
            return;
        };
        if results.is_empty() {
            return;
        }
        if let Some(existing) = self.entries.get_mut(&key) {
            *existing = results;
            return;
        }
        if self.entries.len() >= self.capacity {
            self.evict();
        }
        self.order.push_back(key.clone());
        self.entries.insert(key, results);
    }

    /// Drop the oldest fifth of the entries (at least one).
    fn evict(&mut self) {
        let count = (self.capacity / 5).max(1);
        for _ in 0..count {
            match self.order.pop_front() {
                Some(key) => {
                    self.entries.remove(&key);
                }
                None => break,
            }
        }
        tracing::trace!(evicted = count, remaining = self.entries.len(), "cache eviction");
    }

    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            ratio: if total == 0 { 0.0 } else { self.hits as f64 / total as f64 },
        }
    }

    /// Remove every entry. Hit and miss counters survive.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

fn cache_key(query: &str) -> Option<String> {
    let key = normalize(query);
    (char_len(&key) >= MIN_KEY_LEN).then_some(key)
}
