//! Multi-strategy fuzzy search and relevance ranking.
//!
//! Give it a free-text query and a slice of lightweight documents; get back a
//! ranked, deduplicated, explained list of matches. Typos, abbreviations,
//! synonyms, sound-alike spellings and out-of-order words all still find
//! their document.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │   fuzzy     │────▶│   scoring    │────▶│  search::engine  │
//! │ (distance,  │     │ (ladder,     │     │ (cache, batches, │
//! │  n-grams,   │     │  strategies, │     │  typo fallback)  │
//! │  phonetic)  │     │  ranking)    │     │                  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        ▲                   ▲                    │
//!        │            ┌──────────────┐            ▼
//!        └────────────│   lexicon    │   cache · context · analytics
//!                     └──────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `fuzzy`     | Edit distance, n-gram similarity, phonetic codes  |
//! | `lexicon`   | Abbreviation, synonym, jargon and concept tables  |
//! | `scoring`   | Per-document relevance score and classification   |
//! | `search`    | Query orchestration, typo correction, highlighting |
//! | `cache`     | Bounded result cache                              |
//! | `context`   | Selection history and personalization boost       |
//! | `analytics` | Query frequency, failures, trends, sessions       |
//! | `ingest`    | Domain records to `IndexedDocument`               |
//!
//! # Usage
//!
//! ```
//! use sleuth::{IndexedDocument, MatchKind, SearchEngine};
//!
//! let docs = vec![
//!     IndexedDocument::new("bst", "Binary Search Tree").with_category("Trees"),
//!     IndexedDocument::new("bs", "Binary Search").with_category("Searching"),
//! ];
//! let engine = SearchEngine::new();
//!
//! let results = engine.query_default("Binary Search", &docs);
//! assert_eq!(results[0].document.id, "bs");
//! assert_eq!(results[0].kind, MatchKind::Exact);
//! ```

pub mod analytics;
pub mod cache;
pub mod context;
mod error;
pub mod fuzzy;
pub mod ingest;
pub mod lexicon;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

pub use analytics::{AnalyticsInsights, LogEntry, SearchAnalytics, Session};
pub use cache::ResultCache;
pub use context::SearchContext;
pub use error::{Error, Result};
pub use fuzzy::{
    edit_distance, is_fuzzy_match, levenshtein_within, metaphone, ngram_similarity, phonetic_code,
    similarity, soundex, PhoneticCodes,
};
pub use ingest::{ingest, ingest_json, AlgorithmRecord, Complexity, IntoIndexedDocument};
pub use lexicon::Lexicon;
pub use scoring::{PreparedQuery, RelevanceScorer, ScoreBreakdown, Strategy};
pub use search::typo::suggest;
pub use search::SearchEngine;
pub use types::{
    CacheStats, EngineConfig, IndexedDocument, MatchKind, MatchedField, QueryCount, ScoringWeights,
    SearchOptions, SearchResult,
};
pub use utils::{normalize, tokenize};
