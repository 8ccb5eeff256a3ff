// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The shapes everything else passes around.
//!
//! Documents come in as `IndexedDocument`, results go out as `SearchResult`.
//! Options and weights are plain serde values so callers can keep them in
//! JSON next to the rest of their configuration.
//!
//! # Invariants
//!
//! - **IndexedDocument**: `id` is unique within a collection. The engine
//!   never mutates a document; derived state lives in the cache, analytics
//!   and context side channels.
//!
//! - **SearchResult**: `0.0 <= score <= 1.0`. Lists are sorted by score
//!   descending, then `MatchKind` declaration order, then title, then id.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};

// =============================================================================
// DOCUMENTS
// =============================================================================

/// A search-ready document.
///
/// Ingestion adapters (see `ingest`) produce this from whatever domain record
/// the caller has. Optional fields are skipped by the scorer when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedDocument {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub searchable_text: Option<String>,
}

impl IndexedDocument {
    /// Minimal document with just an id and a title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            tags: Vec::new(),
            summary: None,
            searchable_text: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_searchable_text(mut self, text: impl Into<String>) -> Self {
        self.searchable_text = Some(text.into());
        self
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// How a result was found.
///
/// Declaration order is the tie-break priority when two results share a
/// score: `Exact` sorts before `Partial`, and so on down to `Contextual`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Partial,
    Fuzzy,
    Suggested,
    Semantic,
    Phonetic,
    Contextual,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchKind::Exact => "exact",
            MatchKind::Partial => "partial",
            MatchKind::Fuzzy => "fuzzy",
            MatchKind::Suggested => "suggested",
            MatchKind::Semantic => "semantic",
            MatchKind::Phonetic => "phonetic",
            MatchKind::Contextual => "contextual",
        }
    }
}

/// Document field that contributed to a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedField {
    Title,
    Category,
    Summary,
    Tags,
    SearchableText,
}

/// One ranked hit.
///
/// Generic over the document handle so callers can pass owned documents,
/// references or `Arc`s and get the same handle back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult<D = IndexedDocument> {
    pub document: D,
    pub score: f64,
    pub kind: MatchKind,
    pub highlighted_title: Option<String>,
    pub matched_fields: BTreeSet<MatchedField>,
    pub explanation: Option<String>,
}

// =============================================================================
// OPTIONS
// =============================================================================

/// Per-query knobs. Every field is optional on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchOptions {
    pub fuzzy_threshold: f64,
    pub max_results: usize,
    pub min_score: f64,
    pub highlight_matches: bool,
    pub suggest_typos: bool,
    pub max_suggestion_distance: usize,
    pub enable_semantic_search: bool,
    pub enable_phonetic_search: bool,
    pub enable_contextual_search: bool,
    pub enable_abbreviation_search: bool,
    pub enable_synonym_search: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 0.6,
            max_results: 10,
            min_score: 0.1,
            highlight_matches: true,
            suggest_typos: true,
            max_suggestion_distance: 2,
            enable_semantic_search: true,
            enable_phonetic_search: true,
            enable_contextual_search: true,
            enable_abbreviation_search: true,
            enable_synonym_search: true,
        }
    }
}

impl SearchOptions {
    /// Pull out-of-range values back into something usable.
    ///
    /// NaN thresholds fall back to the defaults rather than poisoning every
    /// comparison downstream.
    pub fn clamped(mut self) -> Self {
        let defaults = Self::default();
        self.fuzzy_threshold = clamp_unit(self.fuzzy_threshold, defaults.fuzzy_threshold);
        self.min_score = clamp_unit(self.min_score, defaults.min_score);
        self.max_results = self.max_results.max(1);
        self
    }
}

fn clamp_unit(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Strategy weights for the relevance scorer.
///
/// The defaults are the empirically tuned constants the ranking tests are
/// written against. Change them through config, not by editing the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringWeights {
    pub exact: f64,
    pub prefix: f64,
    pub contains: f64,
    /// Multiplier on title similarity once it clears `fuzzy_threshold`.
    pub fuzzy: f64,
    /// Similarity below which the scorer tries word-order and jargon matching.
    pub flexible_cutoff: f64,
    pub flexible: f64,
    pub jargon: f64,
    pub category: f64,
    pub summary: f64,
    pub tag: f64,
    pub searchable_text: f64,
    pub max_length_boost: f64,
    pub abbreviation_title: f64,
    pub abbreviation_body: f64,
    pub abbreviation_reverse: f64,
    pub acronym: f64,
    pub synonym: f64,
    pub phonetic: f64,
    pub semantic: f64,
    /// Minimum n-gram similarity for the semantic strategy to count at all.
    pub ngram_floor: f64,
    pub concept: f64,
    /// Discount applied to results found through a typo correction.
    pub typo_discount: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact: 1.0,
            prefix: 0.9,
            contains: 0.7,
            fuzzy: 0.6,
            flexible_cutoff: 0.3,
            flexible: 0.6,
            jargon: 0.5,
            category: 0.4,
            summary: 0.2,
            tag: 0.3,
            searchable_text: 0.1,
            max_length_boost: 0.2,
            abbreviation_title: 0.85,
            abbreviation_body: 0.6,
            abbreviation_reverse: 0.75,
            acronym: 0.8,
            synonym: 0.5,
            phonetic: 0.8,
            semantic: 0.6,
            ngram_floor: 0.3,
            concept: 0.5,
            typo_discount: 0.8,
        }
    }
}

impl ScoringWeights {
    fn named(&self) -> [(&'static str, f64); 22] {
        [
            ("exact", self.exact),
            ("prefix", self.prefix),
            ("contains", self.contains),
            ("fuzzy", self.fuzzy),
            ("flexibleCutoff", self.flexible_cutoff),
            ("flexible", self.flexible),
            ("jargon", self.jargon),
            ("category", self.category),
            ("summary", self.summary),
            ("tag", self.tag),
            ("searchableText", self.searchable_text),
            ("maxLengthBoost", self.max_length_boost),
            ("abbreviationTitle", self.abbreviation_title),
            ("abbreviationBody", self.abbreviation_body),
            ("abbreviationReverse", self.abbreviation_reverse),
            ("acronym", self.acronym),
            ("synonym", self.synonym),
            ("phonetic", self.phonetic),
            ("semantic", self.semantic),
            ("ngramFloor", self.ngram_floor),
            ("concept", self.concept),
            ("typoDiscount", self.typo_discount),
        ]
    }

    /// Every weight must be a finite, non-negative number.
    pub fn validate(&self) -> Result<()> {
        match self.named().into_iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            Some((name, w)) => Err(Error::InvalidConfig(format!(
                "weights.{name} must be finite and non-negative, got {w}"
            ))),
            None => Ok(()),
        }
    }
}

/// Engine-level configuration: capacities, batch size, and scoring weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub cache_capacity: usize,
    pub batch_size: usize,
    pub history_capacity: usize,
    pub log_capacity: usize,
    pub weights: ScoringWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache_capacity: 100,
            batch_size: 50,
            history_capacity: 50,
            log_capacity: 1000,
            weights: ScoringWeights::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Reject capacities that would make the engine useless and weights
    /// that would poison scores.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::InvalidConfig("batchSize must be at least 1".into()));
        }
        if self.cache_capacity == 0 {
            return Err(Error::InvalidConfig("cacheCapacity must be at least 1".into()));
        }
        self.weights.validate()
    }
}

/// Cache counters as reported by `SearchEngine::cache_stats`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub ratio: f64,
}

/// A query and how often it was seen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryCount {
    pub query: String,
    pub count: u64,
}
