// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fallback strategies: what runs when plain substring matching fails.
//!
//! Each strategy returns a raw signal in `[0, 1]` plus the fields it touched
//! and a short detail for the explanation. Weighting and combination happen
//! in `core`, so these functions stay easy to test on their own.

use std::collections::BTreeSet;

use crate::fuzzy::{ngram_similarity, phonetic_code, similarity};
use crate::lexicon::Lexicon;
use crate::scoring::core::{DocumentView, PreparedQuery, MIN_PHONETIC_LEN};
use crate::types::{MatchedField, ScoringWeights};
use crate::utils::{char_len, tokenize};

/// Token similarity needed for a fuzzy word-order hit.
const TOKEN_FUZZY_MIN: f64 = 0.8;

/// Signal for a token that is a prefix of (or prefixed by) a document token.
const TOKEN_PREFIX_SIGNAL: f64 = 0.7;

/// Scale applied to fuzzy token similarity in word-order matching.
const TOKEN_FUZZY_SCALE: f64 = 0.5;

/// What a strategy found.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyHit {
    pub score: f64,
    pub fields: BTreeSet<MatchedField>,
    pub detail: String,
}

impl StrategyHit {
    fn new(score: f64, field: MatchedField, detail: String) -> Self {
        Self {
            score,
            fields: BTreeSet::from([field]),
            detail,
        }
    }
}

/// Where in the document a whole token (or phrase) shows up.
fn field_of(view: &DocumentView, term: &str) -> MatchedField {
    if view.title_tokens.iter().any(|t| t == term) || view.title.contains(term) {
        MatchedField::Title
    } else {
        view.body_contains(term).unwrap_or(MatchedField::Tags)
    }
}

/// Match query tokens against title, category and summary tokens, ignoring order.
///
/// Exact tokens count 1.0, prefixes 0.7, near-identical tokens half their
/// similarity. The result is the average over query tokens.
pub fn word_order(query: &PreparedQuery, view: &DocumentView) -> Option<StrategyHit> {
    if query.tokens.is_empty() {
        return None;
    }
    let doc_tokens = view.ordered_tokens();

    let mut total = 0.0;
    let mut fields = BTreeSet::new();
    let mut matched = Vec::new();

    for qt in &query.tokens {
        let q_len = char_len(qt);
        let mut best: Option<(f64, MatchedField)> = None;

        for (dt, field) in &doc_tokens {
            let d_len = char_len(dt);
            let signal = if dt == qt {
                1.0
            } else if q_len >= 2 && d_len >= 2 && (dt.starts_with(qt.as_str()) || qt.starts_with(dt.as_str())) {
                TOKEN_PREFIX_SIGNAL
            } else if q_len >= 3 && d_len >= 3 {
                let sim = similarity(qt, dt);
                if sim >= TOKEN_FUZZY_MIN {
                    sim * TOKEN_FUZZY_SCALE
                } else {
                    0.0
                }
            } else {
                0.0
            };

            if signal > best.map_or(0.0, |(s, _)| s) {
                best = Some((signal, *field));
            }
        }

        if let Some((signal, field)) = best {
            total += signal;
            fields.insert(field);
            matched.push(qt.as_str());
        }
    }

    (total > 0.0).then(|| StrategyHit {
        score: total / query.tokens.len() as f64,
        fields,
        detail: matched.join(", "),
    })
}

/// Domain jargon: "stable" finds merge sort, "greedy" finds Dijkstra.
///
/// Looks both ways: a query token whose jargon terms appear in the document,
/// or a title token whose jargon terms include the query token.
pub fn jargon(query: &PreparedQuery, view: &DocumentView, lexicon: &Lexicon) -> Option<StrategyHit> {
    let doc_tokens = view.all_tokens();

    for qt in &query.tokens {
        if let Some(terms) = lexicon.jargon(qt) {
            if let Some(term) = terms.iter().find(|t| doc_tokens.contains(*t)) {
                return Some(StrategyHit::new(
                    1.0,
                    field_of(view, term),
                    format!("{qt} → {term}"),
                ));
            }
        }
    }

    for dt in &view.title_tokens {
        if let Some(terms) = lexicon.jargon(dt) {
            if let Some(qt) = query.tokens.iter().find(|qt| terms.contains(*qt)) {
                return Some(StrategyHit::new(1.0, MatchedField::Title, format!("{dt} → {qt}")));
            }
        }
    }

    None
}

/// Abbreviations in both directions, plus title initials.
///
/// Returns an already-weighted score: the four cases carry different
/// confidence, so the caller combines the result as-is.
pub fn abbreviation(
    query: &PreparedQuery,
    view: &DocumentView,
    lexicon: &Lexicon,
    weights: &ScoringWeights,
) -> Option<StrategyHit> {
    let mut best: Option<StrategyHit> = None;
    let mut consider = |score: f64, field: MatchedField, detail: String| {
        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(StrategyHit::new(score, field, detail));
        }
    };

    // query is the abbreviation
    let mut candidates: Vec<&str> = vec![query.normalized.as_str()];
    candidates.extend(query.tokens.iter().map(String::as_str).filter(|t| *t != query.normalized));
    for abbr in candidates {
        let Some(expansions) = lexicon.expansions(abbr) else {
            continue;
        };
        for expansion in expansions {
            if view.title.contains(expansion.as_str()) {
                consider(
                    weights.abbreviation_title,
                    MatchedField::Title,
                    format!("{abbr} → {expansion}"),
                );
            } else if let Some(field) = view.body_contains(expansion) {
                consider(weights.abbreviation_body, field, format!("{abbr} → {expansion}"));
            }
        }
    }

    // query spells out what the title abbreviates
    for (expansion, abbrs) in lexicon.expansion_entries() {
        if !query.normalized.contains(expansion.as_str()) {
            continue;
        }
        if let Some(abbr) = abbrs.iter().find(|a| view.title_tokens.contains(*a)) {
            consider(
                weights.abbreviation_reverse,
                MatchedField::Title,
                format!("{expansion} → {abbr}"),
            );
        }
    }

    // query is the title's initials
    if char_len(&query.compact) >= 2 && view.title_tokens.len() >= 2 {
        let initials: String = view
            .title_tokens
            .iter()
            .filter_map(|t| t.chars().next())
            .collect();
        if initials == query.compact {
            consider(
                weights.acronym,
                MatchedField::Title,
                format!("{} → initials of title", query.compact),
            );
        }
    }

    best
}

/// Fraction of query tokens with a synonym somewhere in the document.
pub fn synonym(query: &PreparedQuery, view: &DocumentView, lexicon: &Lexicon) -> Option<StrategyHit> {
    if query.tokens.is_empty() {
        return None;
    }
    let doc_tokens = view.all_tokens();

    let mut matched = 0usize;
    let mut fields = BTreeSet::new();
    let mut details = Vec::new();
    for qt in &query.tokens {
        let Some(synonyms) = lexicon.synonyms(qt) else {
            continue;
        };
        if let Some(syn) = synonyms.iter().find(|s| doc_tokens.contains(*s)) {
            matched += 1;
            fields.insert(field_of(view, syn));
            details.push(format!("{qt} → {syn}"));
        }
    }

    (matched > 0).then(|| StrategyHit {
        score: matched as f64 / query.tokens.len() as f64,
        fields,
        detail: details.join(", "),
    })
}

/// Fraction of query tokens that sound like some title token.
///
/// Only tokens of three or more letters take part on either side; both the
/// Soundex and Metaphone codes must agree.
pub fn phonetic(query: &PreparedQuery, view: &DocumentView) -> Option<StrategyHit> {
    if query.phonetic.is_empty() {
        return None;
    }
    let title_codes: Vec<_> = view
        .title_tokens
        .iter()
        .filter(|t| char_len(t) >= MIN_PHONETIC_LEN)
        .map(|t| (t, phonetic_code(t)))
        .collect();

    let mut matched = 0usize;
    let mut details = Vec::new();
    for (qt, codes) in &query.phonetic {
        if let Some((tt, _)) = title_codes.iter().find(|(_, c)| codes.sounds_like(c)) {
            matched += 1;
            details.push(format!("{qt} ~ {tt}"));
        }
    }

    (matched > 0).then(|| StrategyHit {
        score: matched as f64 / query.phonetic.len() as f64,
        fields: BTreeSet::from([MatchedField::Title]),
        detail: details.join(", "),
    })
}

/// Character-bigram overlap with title and summary, or a known concept pair.
pub fn semantic(
    query: &PreparedQuery,
    view: &DocumentView,
    lexicon: &Lexicon,
    weights: &ScoringWeights,
) -> Option<StrategyHit> {
    let mut best: Option<StrategyHit> = None;

    let title_sim = ngram_similarity(&query.normalized, &view.title, 2);
    if title_sim >= weights.ngram_floor {
        best = Some(StrategyHit::new(
            title_sim,
            MatchedField::Title,
            format!("{:.0}% character overlap with title", title_sim * 100.0),
        ));
    }
    if let Some(summary) = &view.summary {
        let summary_sim = ngram_similarity(&query.normalized, summary, 2);
        if summary_sim >= weights.ngram_floor && best.as_ref().map_or(true, |b| summary_sim > b.score) {
            best = Some(StrategyHit::new(
                summary_sim,
                MatchedField::Summary,
                format!("{:.0}% character overlap with summary", summary_sim * 100.0),
            ));
        }
    }

    if best.as_ref().map_or(true, |b| weights.concept > b.score) {
        let mut doc_tokens = view.ordered_tokens();
        for tag in &view.tags {
            doc_tokens.extend(tokenize(tag).into_iter().map(|t| (t, MatchedField::Tags)));
        }
        'outer: for qt in &query.tokens {
            for (dt, field) in &doc_tokens {
                if lexicon.are_related_concepts(qt, dt) {
                    best = Some(StrategyHit::new(weights.concept, *field, format!("{qt} ~ {dt}")));
                    break 'outer;
                }
            }
        }
    }

    best
}
