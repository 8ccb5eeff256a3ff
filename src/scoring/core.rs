// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The relevance scorer.
//!
//! `base_score` is the string-matching ladder over title, category, summary,
//! tags and searchable text. `score` wraps it with the lexicon and phonetic
//! strategies plus the personalization boost, and decides the `MatchKind`.
//!
//! # Base ladder
//!
//! ```text
//! title == query            → 1.0  (return)
//! title starts with query   → 0.9  (return)
//! title contains query      → 0.7
//! similarity ≥ threshold    → + similarity × 0.6
//! similarity < 0.3          → word order, then jargon, else 0 (return)
//! category contains query   → + 0.4
//! score > 0.3 or |q| ≤ 3    → summary + 0.2, tag + 0.3, searchable text + 0.1
//! score > 0                 → × (1 + min(0.2, |q|/|title| × 0.2))
//! ```
//!
//! # Advanced strategies
//!
//! | Strategy     | Runs when  | Combination         |
//! |--------------|------------|---------------------|
//! | abbreviation | base < 0.8 | max                 |
//! | synonym      | base < 0.7 | + fraction × 0.5    |
//! | phonetic     | base < 0.6 | max(fraction × 0.8) |
//! | semantic     | base < 0.7 | max(signal × 0.6)   |
//! | contextual   | always     | + boost             |
//!
//! Scoring is pure: the context boost arrives as a precomputed number, so the
//! same inputs always give the same output and batches can run in parallel.

use std::collections::BTreeSet;

use crate::fuzzy::{phonetic_code, similarity, PhoneticCodes};
use crate::lexicon::Lexicon;
use crate::scoring::ranking::classify;
use crate::scoring::strategies::{self, StrategyHit};
use crate::types::{IndexedDocument, MatchKind, MatchedField, ScoringWeights, SearchOptions};
use crate::utils::{char_len, normalize, tokenize};

/// Length cutoff for the "short query" branches (tag/summary checks always
/// run, smart mode raises the fuzzy threshold).
pub const SHORT_QUERY_LEN: usize = 3;

/// Base score below which abbreviation matching runs.
pub const ABBREVIATION_GATE: f64 = 0.8;

/// Base score below which synonym and semantic matching run.
pub const SYNONYM_GATE: f64 = 0.7;

/// Base score below which phonetic matching runs.
pub const PHONETIC_GATE: f64 = 0.6;

/// Tokens shorter than this never take part in phonetic matching.
pub const MIN_PHONETIC_LEN: usize = 3;

/// Which rung of the ladder produced (most of) a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Exact,
    Prefix,
    Substring,
    Fuzzy,
    WordOrder,
    Jargon,
    Category,
    Field,
    Abbreviation,
    Synonym,
    Phonetic,
    Semantic,
    Contextual,
}

/// A query, normalized and tokenized once per search instead of once per document.
#[derive(Debug, Clone)]
pub struct PreparedQuery {
    pub raw: String,
    pub normalized: String,
    /// `normalized` with separators removed, for acronym checks.
    pub compact: String,
    pub tokens: Vec<String>,
    pub len: usize,
    /// Phonetic codes of tokens long enough to encode meaningfully.
    pub phonetic: Vec<(String, PhoneticCodes)>,
}

impl PreparedQuery {
    pub fn new(raw: &str) -> Self {
        let normalized = normalize(raw);
        let tokens = tokenize(raw);
        let compact = tokens.concat();
        let phonetic = tokens
            .iter()
            .filter(|t| char_len(t) >= MIN_PHONETIC_LEN)
            .map(|t| (t.clone(), phonetic_code(t)))
            .collect();
        Self {
            raw: raw.to_string(),
            len: char_len(&normalized),
            normalized,
            compact,
            tokens,
            phonetic,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

/// A document's text fields, normalized once per scoring call.
#[derive(Debug, Clone)]
pub struct DocumentView {
    pub title: String,
    pub title_tokens: Vec<String>,
    pub category: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub searchable_text: Option<String>,
}

impl DocumentView {
    pub fn new(doc: &IndexedDocument) -> Self {
        Self {
            title: normalize(&doc.title),
            title_tokens: tokenize(&doc.title),
            category: doc.category.as_deref().map(normalize),
            summary: doc.summary.as_deref().map(normalize),
            tags: doc.tags.iter().map(|t| normalize(t)).collect(),
            searchable_text: doc.searchable_text.as_deref().map(normalize),
        }
    }

    /// Tokens of the fields word-order matching looks at, tagged by field.
    pub fn ordered_tokens(&self) -> Vec<(String, MatchedField)> {
        let mut tokens: Vec<(String, MatchedField)> = self
            .title_tokens
            .iter()
            .map(|t| (t.clone(), MatchedField::Title))
            .collect();
        for (field, text) in [
            (MatchedField::Category, &self.category),
            (MatchedField::Summary, &self.summary),
        ] {
            if let Some(text) = text {
                tokens.extend(tokenize(text).into_iter().map(|t| (t, field)));
            }
        }
        tokens
    }

    /// Every token in every field, deduplicated.
    pub fn all_tokens(&self) -> BTreeSet<String> {
        let mut tokens: BTreeSet<String> = self.title_tokens.iter().cloned().collect();
        for text in [&self.category, &self.summary, &self.searchable_text]
            .into_iter()
            .flatten()
        {
            tokens.extend(tokenize(text));
        }
        for tag in &self.tags {
            tokens.extend(tokenize(tag));
        }
        tokens
    }

    /// Does any non-title field contain `needle`?
    pub fn body_contains(&self, needle: &str) -> Option<MatchedField> {
        let optional = [
            (MatchedField::Category, &self.category),
            (MatchedField::Summary, &self.summary),
            (MatchedField::SearchableText, &self.searchable_text),
        ];
        for (field, text) in optional {
            if text.as_deref().is_some_and(|t| t.contains(needle)) {
                return Some(field);
            }
        }
        self.tags
            .iter()
            .any(|t| t.contains(needle))
            .then_some(MatchedField::Tags)
    }
}

/// Everything the scorer learned about one (query, document) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub score: f64,
    /// Score of the string-matching ladder alone.
    pub base: f64,
    pub kind: MatchKind,
    pub strategy: Option<Strategy>,
    pub matched_fields: BTreeSet<MatchedField>,
    pub explanation: Option<String>,
}

impl ScoreBreakdown {
    fn zero() -> Self {
        Self {
            score: 0.0,
            base: 0.0,
            kind: MatchKind::Semantic,
            strategy: None,
            matched_fields: BTreeSet::new(),
            explanation: None,
        }
    }
}

/// Tracks which strategy contributed most while scores accumulate.
struct Accumulator {
    score: f64,
    lead: Option<(Strategy, f64)>,
    detail: Option<String>,
    fields: BTreeSet<MatchedField>,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            score: 0.0,
            lead: None,
            detail: None,
            fields: BTreeSet::new(),
        }
    }

    fn credit(&mut self, strategy: Strategy, delta: f64, detail: Option<String>) {
        if delta <= 0.0 {
            return;
        }
        if self.lead.map_or(true, |(_, best)| delta > best) {
            self.lead = Some((strategy, delta));
            self.detail = detail;
        }
    }

    fn add(&mut self, strategy: Strategy, delta: f64, detail: Option<String>) {
        self.score += delta;
        self.credit(strategy, delta, detail);
    }

    /// Raise the score to `candidate` if it's higher.
    fn raise(&mut self, strategy: Strategy, candidate: f64, detail: Option<String>) {
        if candidate > self.score {
            let delta = candidate - self.score;
            self.score = candidate;
            self.credit(strategy, delta, detail);
        }
    }

    fn hit(&mut self, strategy: Strategy, weight: f64, hit: StrategyHit) {
        self.fields.extend(hit.fields.iter().copied());
        self.raise(strategy, hit.score * weight, Some(hit.detail));
    }

    fn strategy(&self) -> Option<Strategy> {
        self.lead.map(|(s, _)| s)
    }
}

/// Scores documents against a query. Holds no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct RelevanceScorer<'a> {
    pub weights: &'a ScoringWeights,
    pub lexicon: &'a Lexicon,
}

impl<'a> RelevanceScorer<'a> {
    pub fn new(weights: &'a ScoringWeights, lexicon: &'a Lexicon) -> Self {
        Self { weights, lexicon }
    }

    /// Full multi-strategy score for one document.
    ///
    /// `context_boost` is the personalization bonus for this document, already
    /// computed by the caller; it's ignored when contextual search is off.
    pub fn score(
        &self,
        query: &PreparedQuery,
        doc: &IndexedDocument,
        options: &SearchOptions,
        context_boost: f64,
    ) -> ScoreBreakdown {
        if query.is_empty() {
            return ScoreBreakdown::zero();
        }
        let view = DocumentView::new(doc);
        let mut acc = self.base(query, &view, options);
        let base = acc.score;
        let w = self.weights;

        if options.enable_abbreviation_search && base < ABBREVIATION_GATE {
            if let Some(hit) = strategies::abbreviation(query, &view, self.lexicon, w) {
                acc.hit(Strategy::Abbreviation, 1.0, hit);
            }
        }

        if options.enable_synonym_search && base < SYNONYM_GATE {
            if let Some(hit) = strategies::synonym(query, &view, self.lexicon) {
                acc.fields.extend(hit.fields.iter().copied());
                acc.add(Strategy::Synonym, hit.score * w.synonym, Some(hit.detail));
            }
        }

        if options.enable_phonetic_search && base < PHONETIC_GATE {
            if let Some(hit) = strategies::phonetic(query, &view) {
                acc.hit(Strategy::Phonetic, w.phonetic, hit);
            }
        }

        if options.enable_semantic_search && base < SYNONYM_GATE {
            if let Some(hit) = strategies::semantic(query, &view, self.lexicon, w) {
                acc.hit(Strategy::Semantic, w.semantic, hit);
            }
        }

        if options.enable_contextual_search && context_boost > 0.0 && acc.score > 0.0 {
            acc.add(
                Strategy::Contextual,
                context_boost,
                Some("matches your recent selections".to_string()),
            );
        }

        let score = acc.score.clamp(0.0, 1.0);
        let strategy = acc.strategy();
        ScoreBreakdown {
            score,
            base,
            kind: classify(score, strategy),
            strategy,
            explanation: strategy.map(|s| explain(s, acc.detail.as_deref())),
            matched_fields: acc.fields,
        }
    }

    /// The string-matching ladder on its own, clamped to `[0, 1]`.
    pub fn base_score(
        &self,
        query: &PreparedQuery,
        doc: &IndexedDocument,
        options: &SearchOptions,
    ) -> f64 {
        if query.is_empty() {
            return 0.0;
        }
        self.base(query, &DocumentView::new(doc), options).score
    }

    fn base(&self, query: &PreparedQuery, view: &DocumentView, options: &SearchOptions) -> Accumulator {
        let w = self.weights;
        let q = query.normalized.as_str();
        let mut acc = Accumulator::new();

        if view.title == q {
            acc.fields.insert(MatchedField::Title);
            acc.add(Strategy::Exact, w.exact, None);
            return acc;
        }
        if view.title.starts_with(q) {
            acc.fields.insert(MatchedField::Title);
            acc.add(Strategy::Prefix, w.prefix, Some(query.raw.trim().to_string()));
            return acc;
        }

        if view.title.contains(q) {
            acc.fields.insert(MatchedField::Title);
            acc.add(Strategy::Substring, w.contains, Some(query.raw.trim().to_string()));
        } else {
            let sim = similarity(q, &view.title);
            if sim >= options.fuzzy_threshold {
                acc.fields.insert(MatchedField::Title);
                acc.add(Strategy::Fuzzy, sim * w.fuzzy, Some(format!("{:.0}%", sim * 100.0)));
            }
            if sim < w.flexible_cutoff {
                if let Some(hit) = strategies::word_order(query, view) {
                    acc.fields.extend(hit.fields.iter().copied());
                    acc.add(Strategy::WordOrder, hit.score * w.flexible, Some(hit.detail));
                } else if let Some(hit) = strategies::jargon(query, view, self.lexicon) {
                    acc.fields.extend(hit.fields.iter().copied());
                    acc.add(Strategy::Jargon, w.jargon, Some(hit.detail));
                } else if acc.score <= 0.0 {
                    return Accumulator::new();
                }
            }
        }

        if view.category.as_deref().is_some_and(|c| c.contains(q)) {
            acc.fields.insert(MatchedField::Category);
            acc.add(Strategy::Category, w.category, None);
        }

        if acc.score > w.flexible_cutoff || query.len <= SHORT_QUERY_LEN {
            if view.summary.as_deref().is_some_and(|s| s.contains(q)) {
                acc.fields.insert(MatchedField::Summary);
                acc.add(Strategy::Field, w.summary, Some("summary".to_string()));
            }
            // First matching tag only
            if acc.score < 0.8 && view.tags.iter().any(|t| t.contains(q)) {
                acc.fields.insert(MatchedField::Tags);
                acc.add(Strategy::Field, w.tag, Some("tags".to_string()));
            }
            if acc.score < 0.5 && view.searchable_text.as_deref().is_some_and(|s| s.contains(q)) {
                acc.fields.insert(MatchedField::SearchableText);
                acc.add(Strategy::Field, w.searchable_text, Some("description".to_string()));
            }
        }

        if acc.score > 0.0 {
            let title_len = char_len(&view.title).max(1) as f64;
            let ratio = query.len as f64 / title_len;
            acc.score *= 1.0 + (ratio * w.max_length_boost).min(w.max_length_boost);
        }
        acc.score = acc.score.clamp(0.0, 1.0);
        acc
    }

    /// Cheap path for one- and two-character queries: exact, prefix, category.
    pub fn quick_score(&self, query: &PreparedQuery, doc: &IndexedDocument) -> ScoreBreakdown {
        if query.is_empty() {
            return ScoreBreakdown::zero();
        }
        let w = self.weights;
        let q = query.normalized.as_str();
        let title = normalize(&doc.title);

        let (score, strategy, field) = if title == q {
            (w.exact, Strategy::Exact, MatchedField::Title)
        } else if title.starts_with(q) {
            (w.prefix, Strategy::Prefix, MatchedField::Title)
        } else if doc.category.as_deref().is_some_and(|c| normalize(c).contains(q)) {
            (w.category, Strategy::Category, MatchedField::Category)
        } else {
            return ScoreBreakdown::zero();
        };

        let score = score.clamp(0.0, 1.0);
        ScoreBreakdown {
            score,
            base: score,
            kind: classify(score, Some(strategy)),
            strategy: Some(strategy),
            matched_fields: BTreeSet::from([field]),
            explanation: Some(explain(strategy, Some(query.raw.trim()))),
        }
    }
}

/// Human-readable reason for a result.
fn explain(strategy: Strategy, detail: Option<&str>) -> String {
    let detail = detail.unwrap_or_default();
    match strategy {
        Strategy::Exact => "exact title match".to_string(),
        Strategy::Prefix => format!("title starts with \"{detail}\""),
        Strategy::Substring => format!("title contains \"{detail}\""),
        Strategy::Fuzzy => format!("title is {detail} similar"),
        Strategy::WordOrder => format!("matched words in any order: {detail}"),
        Strategy::Jargon => format!("related concept: {detail}"),
        Strategy::Category => "category match".to_string(),
        Strategy::Field => format!("matched in {detail}"),
        Strategy::Abbreviation => format!("abbreviation: {detail}"),
        Strategy::Synonym => format!("synonym: {detail}"),
        Strategy::Phonetic => format!("sounds like: {detail}"),
        Strategy::Semantic => format!("semantic match: {detail}"),
        Strategy::Contextual => detail.to_string(),
    }
}
