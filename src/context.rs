// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Session personalization: what the user picked before nudges what they see next.
//!
//! ```text
//! boost = min(0.3, doc_uses × 0.1)
//!       + min(0.2, category_uses × 0.05)
//!       + min(0.1, related_history × 0.02)
//! ```
//!
//! So the boost never exceeds 0.6, and a single strong preference can't
//! outrank a genuinely better match on its own.

use std::collections::{HashMap, VecDeque};

use crate::types::IndexedDocument;
use crate::utils::normalize;

const DOC_STEP: f64 = 0.1;
const DOC_CAP: f64 = 0.3;
const CATEGORY_STEP: f64 = 0.05;
const CATEGORY_CAP: f64 = 0.2;
const HISTORY_STEP: f64 = 0.02;
const HISTORY_CAP: f64 = 0.1;

/// Selection history and preference counters for one user.
#[derive(Debug, Clone)]
pub struct SearchContext {
    /// Normalized queries, newest first.
    history: VecDeque<String>,
    history_capacity: usize,
    document_uses: HashMap<String, u32>,
    category_uses: HashMap<String, u32>,
}

impl SearchContext {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(history_capacity),
            history_capacity: history_capacity.max(1),
            document_uses: HashMap::new(),
            category_uses: HashMap::new(),
        }
    }

    /// Remember that `query` led the user to `document`.
    pub fn record_selection(&mut self, query: &str, document: &IndexedDocument) {
        let query = normalize(query);
        if !query.is_empty() {
            self.history.push_front(query);
            self.history.truncate(self.history_capacity);
        }
        *self.document_uses.entry(document.id.clone()).or_default() += 1;
        if let Some(category) = &document.category {
            *self.category_uses.entry(category.clone()).or_default() += 1;
        }
    }

    /// Personalization bonus for `document` under `query`, in `[0, 0.6]`.
    pub fn boost(&self, document: &IndexedDocument, query: &str) -> f64 {
        let doc_uses = self.document_uses.get(&document.id).copied().unwrap_or(0);
        let category_uses = document
            .category
            .as_ref()
            .and_then(|c| self.category_uses.get(c))
            .copied()
            .unwrap_or(0);

        let query = normalize(query);
        let related = if query.is_empty() {
            0
        } else {
            self.history
                .iter()
                .filter(|h| h.contains(query.as_str()) || query.contains(h.as_str()))
                .count()
        };

        (f64::from(doc_uses) * DOC_STEP).min(DOC_CAP)
            + (f64::from(category_uses) * CATEGORY_STEP).min(CATEGORY_CAP)
            + (related as f64 * HISTORY_STEP).min(HISTORY_CAP)
    }

    /// Past queries, newest first.
    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    /// Most-selected categories, count descending then name.
    pub fn top_categories(&self, limit: usize) -> Vec<(String, u32)> {
        let mut categories: Vec<(String, u32)> = self
            .category_uses
            .iter()
            .map(|(c, n)| (c.clone(), *n))
            .collect();
        categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        categories.truncate(limit);
        categories
    }

    pub fn clear(&mut self) {
        self.history.clear();
        self.document_uses.clear();
        self.category_uses.clear();
    }
}
