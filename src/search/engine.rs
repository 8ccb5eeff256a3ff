// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query orchestrator.
//!
//! ```text
//! query ──▶ cache ──hit──────────────────────────────────────────────────────────▶ results
//!             │
//!            miss
//!             ▼
//!        smart mode ──▶ fast path (|q| ≤ 2) or batched scoring ──▶ sort, cap
//!                                                                      │
//!                                               zero results? ──▶ typo fallback
//!                                                                      ▼
//!                                                            cache + analytics ──▶ results
//! ```
//!
//! Scoring is pure. The three state containers (cache, analytics, context)
//! each sit behind their own lock, and no two are ever held at once, so one
//! engine can be shared across threads.

use std::borrow::{Borrow, Cow};

use parking_lot::Mutex;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::analytics::{AnalyticsInsights, LogEntry, SearchAnalytics, Session};
use crate::cache::ResultCache;
use crate::context::SearchContext;
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::scoring::ranking::compare_results;
use crate::scoring::{PreparedQuery, RelevanceScorer, ScoreBreakdown, SHORT_QUERY_LEN};
use crate::search::dedup::ResultMerger;
use crate::search::highlight::highlight;
use crate::search::typo;
use crate::types::{CacheStats, EngineConfig, IndexedDocument, MatchKind, SearchOptions, SearchResult};
use crate::utils::{char_len, normalize};

/// Queries this short skip full scoring entirely.
pub const FAST_PATH_LEN: usize = 2;

/// Early exit needs this many times `max_results` accumulated...
const EARLY_EXIT_FACTOR: f64 = 1.5;
/// ...and at least `max_results` of them scoring this high.
const EARLY_EXIT_SCORE: f64 = 0.7;

/// Fuzzy threshold floor smart mode applies to very short queries.
const SHORT_QUERY_THRESHOLD: f64 = 0.9;

/// Uppercase queries up to this length read as acronyms.
const ACRONYM_MAX_LEN: usize = 5;

const MAX_SUGGESTIONS: usize = 8;
const SUGGESTED_POPULAR: usize = 5;
const SUGGESTED_TRENDING: usize = 3;
const SUGGESTED_CATEGORIES: usize = 5;
const TRENDING_HOURS: u64 = 24;

/// Multi-strategy search over caller-owned documents.
///
/// `D` is whatever handle the caller keeps documents in: owned
/// `IndexedDocument`s, references, or `Arc`s. Results hand the same handle
/// back.
pub struct SearchEngine<D = IndexedDocument> {
    config: EngineConfig,
    lexicon: Cow<'static, Lexicon>,
    cache: Mutex<ResultCache<SearchResult<D>>>,
    analytics: Mutex<SearchAnalytics>,
    context: Mutex<SearchContext>,
}

impl<D> Default for SearchEngine<D>
where
    D: Borrow<IndexedDocument> + Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<D> SearchEngine<D>
where
    D: Borrow<IndexedDocument> + Clone + Send + Sync,
{
    /// Engine with default configuration and the bundled lexicon.
    pub fn new() -> Self {
        Self::build(EngineConfig::default())
    }

    /// Engine with a custom configuration. Fails if the config is unusable.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        Self {
            lexicon: Cow::Borrowed(Lexicon::builtin()),
            cache: Mutex::new(ResultCache::new(config.cache_capacity)),
            analytics: Mutex::new(SearchAnalytics::new(config.log_capacity)),
            context: Mutex::new(SearchContext::new(config.history_capacity)),
            config,
        }
    }

    /// Replace the lexicon. Extend `Lexicon::builtin().clone()` to add to
    /// the bundled vocabulary rather than replace it.
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = Cow::Owned(lexicon);
        self.cache.get_mut().clear();
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Search `documents` for `text`.
    ///
    /// Never fails: a blank query or an empty collection gives an empty
    /// list, and out-of-range options are clamped. The cache is keyed by the
    /// normalized query alone, so call `clear_cache` after swapping the
    /// document collection.
    pub fn query(&self, text: &str, documents: &[D], options: &SearchOptions) -> Vec<SearchResult<D>> {
        if normalize(text).is_empty() {
            return Vec::new();
        }
        let options = options.clamped();

        let cached = self.cache.lock().get(text);
        if let Some(results) = cached {
            tracing::debug!(query = text, results = results.len(), "cache hit");
            return results;
        }
        tracing::debug!(query = text, documents = documents.len(), "cache miss");

        let mut results = self.run(text, documents, &options);
        if results.is_empty() && options.suggest_typos {
            results = self.typo_fallback(text, documents, &options);
        }

        self.analytics.lock().record_query(text, results.len());
        self.cache.lock().put(text, results.clone());
        results
    }

    /// `query` with default options.
    pub fn query_default(&self, text: &str, documents: &[D]) -> Vec<SearchResult<D>> {
        self.query(text, documents, &SearchOptions::default())
    }

    /// Score, sort and cap. No cache, no analytics, no typo fallback.
    fn run(&self, text: &str, documents: &[D], options: &SearchOptions) -> Vec<SearchResult<D>> {
        let prepared = PreparedQuery::new(text);
        if prepared.is_empty() || documents.is_empty() {
            return Vec::new();
        }
        let options = smart_options(text, &prepared, options);
        let scorer = RelevanceScorer::new(&self.config.weights, &self.lexicon);

        let mut results = if prepared.len <= FAST_PATH_LEN {
            documents
                .iter()
                .filter_map(|doc| {
                    let breakdown = scorer.quick_score(&prepared, doc.borrow());
                    keep(&options, doc, breakdown)
                })
                .collect()
        } else {
            self.score_batches(&scorer, &prepared, documents, &options)
        };

        results.sort_by(compare_results);
        results.truncate(options.max_results);
        if options.highlight_matches {
            for result in &mut results {
                result.highlighted_title = highlight(&result.document.borrow().title, text);
            }
        }
        results
    }

    fn score_batches(
        &self,
        scorer: &RelevanceScorer<'_>,
        prepared: &PreparedQuery,
        documents: &[D],
        options: &SearchOptions,
    ) -> Vec<SearchResult<D>> {
        // Snapshot so the lock isn't held while scoring
        let context = options
            .enable_contextual_search
            .then(|| self.context.lock().clone());
        let score_one = |doc: &D| {
            let boost = context
                .as_ref()
                .map_or(0.0, |c| c.boost(doc.borrow(), &prepared.raw));
            let breakdown = scorer.score(prepared, doc.borrow(), options, boost);
            keep(options, doc, breakdown)
        };

        let max_results = options.max_results;
        let mut results: Vec<SearchResult<D>> = Vec::new();
        let mut strong = 0usize;

        for (index, batch) in documents.chunks(self.config.batch_size).enumerate() {
            #[cfg(feature = "parallel")]
            let scored: Vec<SearchResult<D>> = batch.par_iter().filter_map(score_one).collect();
            #[cfg(not(feature = "parallel"))]
            let scored: Vec<SearchResult<D>> = batch.iter().filter_map(score_one).collect();

            strong += scored.iter().filter(|r| r.score >= EARLY_EXIT_SCORE).count();
            results.extend(scored);

            if results.len() as f64 > EARLY_EXIT_FACTOR * max_results as f64 && strong >= max_results {
                tracing::debug!(
                    batches = index + 1,
                    results = results.len(),
                    "early exit, enough strong matches"
                );
                break;
            }
        }
        results
    }

    /// Re-run the query for each typo correction, one level deep.
    fn typo_fallback(&self, text: &str, documents: &[D], options: &SearchOptions) -> Vec<SearchResult<D>> {
        let suggestions = typo::suggest(text, documents, options.max_suggestion_distance);
        if suggestions.is_empty() {
            return Vec::new();
        }
        tracing::debug!(query = text, ?suggestions, "typo fallback");

        let inner = SearchOptions {
            suggest_typos: false,
            ..*options
        };
        let discount = self.config.weights.typo_discount;
        let mut merger = ResultMerger::new();
        for suggestion in &suggestions {
            for mut result in self.run(suggestion, documents, &inner) {
                result.score = (result.score * discount).clamp(0.0, 1.0);
                if result.score < options.min_score {
                    continue;
                }
                result.kind = MatchKind::Suggested;
                result.explanation = Some(match result.explanation {
                    Some(reason) => format!("did you mean \"{suggestion}\"? {reason}"),
                    None => format!("did you mean \"{suggestion}\"?"),
                });
                merger.merge(result);
            }
        }
        merger.into_sorted(options.max_results)
    }

    /// Remember that the user picked `document` after searching for `text`.
    pub fn record_selection(&self, text: &str, document: &IndexedDocument) {
        self.context.lock().record_selection(text, document);
        self.analytics.lock().record_selection(text, &document.id);
    }

    /// Completions for a partially typed query.
    ///
    /// Popular queries first, then trending ones, then the user's preferred
    /// categories; filtered by `partial`, deduplicated, at most eight.
    pub fn suggestions(&self, partial: &str) -> Vec<String> {
        let partial = normalize(partial);
        let mut candidates: Vec<String> = Vec::new();
        {
            let analytics = self.analytics.lock();
            candidates.extend(analytics.popular_queries(SUGGESTED_POPULAR).into_iter().map(|q| q.query));
            candidates.extend(
                analytics
                    .trending_queries(TRENDING_HOURS)
                    .into_iter()
                    .take(SUGGESTED_TRENDING)
                    .map(|q| q.query),
            );
        }
        candidates.extend(
            self.context
                .lock()
                .top_categories(SUGGESTED_CATEGORIES)
                .into_iter()
                .map(|(category, _)| category),
        );

        let mut seen = std::collections::HashSet::new();
        candidates
            .into_iter()
            .filter(|c| normalize(c).contains(partial.as_str()))
            .filter(|c| seen.insert(normalize(c)))
            .take(MAX_SUGGESTIONS)
            .collect()
    }

    pub fn analytics_snapshot(&self) -> AnalyticsInsights {
        self.analytics.lock().insights()
    }

    /// Logged queries with their result counts, newest first.
    pub fn recent_queries(&self, limit: usize) -> Vec<LogEntry> {
        self.analytics.lock().recent_queries(limit)
    }

    /// Switch analytics to session `id`, creating it if needed.
    pub fn start_session(&self, id: &str) {
        self.analytics.lock().start_session(id);
    }

    pub fn session(&self, id: &str) -> Option<Session> {
        self.analytics.lock().session(id).cloned()
    }

    /// Past queries that led to a selection, newest first.
    pub fn search_history(&self) -> Vec<String> {
        self.context.lock().history().map(str::to_string).collect()
    }

    /// Forget selection history and preferences.
    pub fn clear_context(&self) {
        self.context.lock().clear();
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    /// Drop cached results. Hit and miss counters are kept.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

/// Build a result from a breakdown if it clears `min_score`.
fn keep<D: Clone>(options: &SearchOptions, doc: &D, breakdown: ScoreBreakdown) -> Option<SearchResult<D>> {
    if breakdown.score.is_nan() || breakdown.score <= 0.0 || breakdown.score < options.min_score {
        return None;
    }
    Some(SearchResult {
        document: doc.clone(),
        score: breakdown.score,
        kind: breakdown.kind,
        highlighted_title: None,
        matched_fields: breakdown.matched_fields,
        explanation: breakdown.explanation,
    })
}

/// Adapt strategy switches to the shape of the query.
///
/// First matching rule wins. Each rule switches on the strategies that suit
/// its query shape, even ones the caller turned off, and switches off the ones
/// that only add noise.
pub fn smart_options(text: &str, prepared: &PreparedQuery, options: &SearchOptions) -> SearchOptions {
    let mut adapted = *options;
    let trimmed = text.trim();

    if prepared.len <= SHORT_QUERY_LEN {
        adapted.fuzzy_threshold = adapted.fuzzy_threshold.max(SHORT_QUERY_THRESHOLD);
        adapted.enable_semantic_search = false;
        adapted.enable_phonetic_search = false;
        tracing::trace!(query = trimmed, "smart mode: short query");
    } else if char_len(trimmed) <= ACRONYM_MAX_LEN && trimmed.chars().all(|c| c.is_alphabetic() && c.is_uppercase()) {
        adapted.enable_abbreviation_search = true;
        adapted.enable_phonetic_search = false;
        tracing::trace!(query = trimmed, "smart mode: acronym");
    } else if trimmed
        .chars()
        .any(|c| c.is_numeric() || c.is_ascii_punctuation())
    {
        adapted.enable_semantic_search = true;
        adapted.enable_abbreviation_search = true;
        adapted.enable_synonym_search = false;
        tracing::trace!(query = trimmed, "smart mode: technical");
    } else {
        adapted.enable_semantic_search = true;
        adapted.enable_synonym_search = true;
        adapted.enable_phonetic_search = true;
        tracing::trace!(query = trimmed, "smart mode: natural language");
    }
    adapted
}
