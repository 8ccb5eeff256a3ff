// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character n-gram overlap.
//!
//! Jaccard over padded n-gram sets. Padding with a space on each side gives
//! word edges their own grams, so "sort" and "sorting" share " s" on top of
//! the interior grams.

use std::collections::HashSet;

/// Padded character n-grams of the lowercased input.
pub fn ngrams(value: &str, n: usize) -> HashSet<String> {
    let n = n.max(1);
    let padded: Vec<char> = std::iter::once(' ')
        .chain(value.to_lowercase().chars())
        .chain(std::iter::once(' '))
        .collect();

    if padded.len() < n {
        return HashSet::from([padded.into_iter().collect()]);
    }
    padded.windows(n).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity of the two strings' n-gram sets, in `[0, 1]`.
///
/// Returns 0 if either side is empty; an empty string has no content to
/// share, even with another empty string.
pub fn ngram_similarity(a: &str, b: &str, n: usize) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let grams_a = ngrams(a, n);
    let grams_b = ngrams(b, n);
    let intersection = grams_a.intersection(&grams_b).count();
    let union = grams_a.len() + grams_b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}
