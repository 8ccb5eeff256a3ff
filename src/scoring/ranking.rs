// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get labelled and sorted.
//!
//! Score dominates. `MatchKind` only breaks ties between equal scores, then
//! title and id make the order total so repeated queries return identical
//! lists.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::scoring::core::Strategy;
use crate::types::{IndexedDocument, MatchKind, SearchResult};
use crate::utils::normalize;

/// Score at or above which a result counts as exact.
pub const EXACT_CUTOFF: f64 = 0.9;
pub const PARTIAL_CUTOFF: f64 = 0.6;
pub const FUZZY_CUTOFF: f64 = 0.4;

/// Label a final score.
///
/// Weak scores are named after the strategy that supplied most of them:
/// phonetic, contextual, or semantic for everything else.
pub fn classify(score: f64, strategy: Option<Strategy>) -> MatchKind {
    if score >= EXACT_CUTOFF {
        MatchKind::Exact
    } else if score >= PARTIAL_CUTOFF {
        MatchKind::Partial
    } else if score >= FUZZY_CUTOFF {
        MatchKind::Fuzzy
    } else {
        match strategy {
            Some(Strategy::Phonetic) => MatchKind::Phonetic,
            Some(Strategy::Contextual) => MatchKind::Contextual,
            _ => MatchKind::Semantic,
        }
    }
}

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Kind** - declaration order of `MatchKind`
/// 3. **Title** - alphabetical, ignoring case, then by raw title
/// 4. **Id** - final tiebreaker
pub fn compare_results<D: Borrow<IndexedDocument>>(a: &SearchResult<D>, b: &SearchResult<D>) -> Ordering {
    let (da, db) = (a.document.borrow(), b.document.borrow());
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| normalize(&da.title).cmp(&normalize(&db.title)))
        .then_with(|| da.title.cmp(&db.title))
        .then_with(|| da.id.cmp(&db.id))
}
