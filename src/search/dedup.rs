// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication for the typo fallback.
//!
//! A document should appear at most once in search results. Sounds obvious,
//! but the fallback runs one query per suggested correction, and "sercah"
//! corrected to both "search" and "serch" finds the same documents twice.
//!
//! `ResultMerger` keys on the document id alone.
//!
//! **Invariant**: Each document appears at most once in search results.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::scoring::ranking::compare_results;
use crate::types::{IndexedDocument, SearchResult};

/// Merges result lists, keeping the best result per document id.
///
/// When a document appears multiple times:
/// 1. Keep the **highest score**
/// 2. If same score, keep the **better kind**
/// 3. Otherwise keep the **first occurrence**
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::new();
/// merger.merge_all(results_for_search);
/// merger.merge_all(results_for_serch);
/// let results = merger.into_sorted(limit);
/// ```
pub struct ResultMerger<D = IndexedDocument> {
    map: HashMap<String, SearchResult<D>>,
}

impl<D: Borrow<IndexedDocument>> Default for ResultMerger<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Borrow<IndexedDocument>> ResultMerger<D> {
    pub fn new() -> Self {
        Self { map: HashMap::new() }
    }

    /// Merge a single result, keeping the best per document id.
    pub fn merge(&mut self, result: SearchResult<D>) {
        let id = result.document.borrow().id.clone();
        match self.map.get_mut(&id) {
            Some(existing) => {
                if compare_results(&result, existing) == Ordering::Less {
                    *existing = result;
                }
            }
            None => {
                self.map.insert(id, result);
            }
        }
    }

    pub fn merge_all(&mut self, results: impl IntoIterator<Item = SearchResult<D>>) {
        for result in results {
            self.merge(result);
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.map.contains_key(id)
    }

    /// Sorted by `compare_results`, truncated to `limit`.
    pub fn into_sorted(self, limit: usize) -> Vec<SearchResult<D>> {
        let mut results: Vec<_> = self.map.into_values().collect();
        results.sort_by(compare_results);
        results.truncate(limit);
        results
    }
}
