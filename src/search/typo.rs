// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo correction against the vocabulary of the documents being searched.
//!
//! There is no dictionary. The candidate words are whatever the documents
//! themselves contain, so a correction always points at something findable.

use std::borrow::Borrow;
use std::collections::BTreeSet;

use crate::fuzzy::{edit_distance, levenshtein_within};
use crate::types::IndexedDocument;
use crate::utils::{char_len, normalize, tokenize};

/// Most corrections returned for one query.
pub const MAX_SUGGESTIONS: usize = 3;

/// Every distinct token in the searchable fields of `documents`.
pub fn vocabulary<D: Borrow<IndexedDocument>>(documents: &[D]) -> BTreeSet<String> {
    let mut words = BTreeSet::new();
    for doc in documents {
        let doc = doc.borrow();
        words.extend(tokenize(&doc.title));
        for text in [&doc.category, &doc.searchable_text].into_iter().flatten() {
            words.extend(tokenize(text));
        }
        for tag in &doc.tags {
            words.extend(tokenize(tag));
        }
    }
    words
}

/// Up to three vocabulary words within `max_distance` edits of `query`.
///
/// Words much shorter than the query are skipped (a two-letter token is
/// rarely what someone typing six letters meant). Closest first, then
/// alphabetical.
pub fn suggest<D: Borrow<IndexedDocument>>(
    query: &str,
    documents: &[D],
    max_distance: usize,
) -> Vec<String> {
    let query = normalize(query);
    if query.is_empty() || max_distance == 0 {
        return Vec::new();
    }
    let q_len = char_len(&query);

    let mut candidates: Vec<(f64, String)> = vocabulary(documents)
        .into_iter()
        .filter(|word| char_len(word) + 1 >= q_len)
        .filter(|word| levenshtein_within(&query, word, max_distance))
        .filter_map(|word| {
            let distance = edit_distance(&query, &word);
            if distance == 0 {
                return None;
            }
            let longest = q_len.max(char_len(&word)) as f64;
            Some((1.0 - distance as f64 / longest, word))
        })
        .collect();

    candidates.sort_by(|(sa, wa), (sb, wb)| sb.total_cmp(sa).then_with(|| wa.cmp(wb)));
    candidates
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, word)| word)
        .collect()
}
