//! Correction of misspelled queries.

use crate::common::{ids, make_doc};
use sleuth::{MatchKind, SearchEngine, SearchOptions};

fn search_docs() -> Vec<sleuth::IndexedDocument> {
    vec![
        make_doc("1", "Binary Search"),
        make_doc("2", "Linear Search"),
        make_doc("3", "Heap Sort"),
    ]
}

#[test]
fn test_transposed_letters_are_corrected() {
    let engine = SearchEngine::new();
    let results = engine.query_default("sercah", &search_docs());

    assert_eq!(ids(&results), ["1", "2"]);
    let direct = 0.7 * (1.0 + (6.0 / 13.0) * 0.2);
    for r in &results {
        assert_eq!(r.kind, MatchKind::Suggested);
        assert!((r.score - 0.8 * direct).abs() < 1e-9, "got {}", r.score);
        assert!(r
            .explanation
            .as_deref()
            .is_some_and(|e| e.starts_with("did you mean \"search\"?")));
    }
}

#[test]
fn test_corrected_query_counts_as_success() {
    let engine = SearchEngine::new();
    engine.query_default("sercah", &search_docs());

    let insights = engine.analytics_snapshot();
    assert_eq!(insights.total_searches, 1);
    assert_eq!(insights.failed_searches, 0);
}

#[test]
fn test_fallback_can_be_disabled() {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        suggest_typos: false,
        ..SearchOptions::default()
    };
    assert!(engine.query("sercah", &search_docs(), &options).is_empty());
    assert_eq!(engine.analytics_snapshot().failed_searches, 1);
}

#[test]
fn test_discounted_results_respect_min_score() {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        min_score: 0.7,
        ..SearchOptions::default()
    };
    assert!(engine.query("sercah", &search_docs(), &options).is_empty());
}

#[test]
fn test_distance_zero_disables_suggestions() {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        max_suggestion_distance: 0,
        ..SearchOptions::default()
    };
    assert!(engine.query("sercah", &search_docs(), &options).is_empty());
}

#[test]
fn test_nothing_close_enough() {
    let engine = SearchEngine::new();
    assert!(engine.query_default("xylophone", &search_docs()).is_empty());
}
