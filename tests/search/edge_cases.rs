//! Inputs at the edges: blanks, empties, out-of-range options, odd text.

use crate::common::{make_doc, sample_catalog};
use sleuth::{suggest, IndexedDocument, SearchEngine, SearchOptions};

#[test]
fn test_blank_queries() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();
    for query in ["", " ", "\t\n"] {
        assert!(engine.query_default(query, &docs).is_empty());
    }
    assert_eq!(engine.analytics_snapshot().total_searches, 0);
}

#[test]
fn test_empty_collection() {
    let engine = SearchEngine::new();
    let docs: Vec<IndexedDocument> = Vec::new();
    assert!(engine.query_default("binary search", &docs).is_empty());
    assert!(suggest("search", &docs, 2).is_empty());
}

#[test]
fn test_empty_suggestion_query() {
    assert!(suggest("", &sample_catalog(), 2).is_empty());
}

#[test]
fn test_zero_max_results_clamps_to_one() {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        max_results: 0,
        ..SearchOptions::default()
    };
    let results = engine.query("sort", &sample_catalog(), &options);
    assert_eq!(results.len(), 1);
}

#[test]
fn test_nan_min_score_uses_default() {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        min_score: f64::NAN,
        fuzzy_threshold: f64::NAN,
        ..SearchOptions::default()
    };
    let results = engine.query("heap", &sample_catalog(), &options);
    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.score >= 0.1));
}

#[test]
fn test_min_score_above_one_clamps() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("a", "Alpha Sort"), make_doc("b", "Beta Sort")];
    let options = SearchOptions {
        min_score: 2.0,
        ..SearchOptions::default()
    };
    let results = engine.query("Alpha Sort", &docs, &options);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.id, "a");
}

#[test]
fn test_highlighting_off() {
    let engine = SearchEngine::new();
    let options = SearchOptions {
        highlight_matches: false,
        ..SearchOptions::default()
    };
    let results = engine.query("heap", &sample_catalog(), &options);
    assert!(results.iter().all(|r| r.highlighted_title.is_none()));
}

#[test]
fn test_multibyte_titles() {
    let engine = SearchEngine::new();
    let docs = vec![
        make_doc("1", "Ünïcode Sörting"),
        make_doc("2", "日本語の検索"),
    ];
    let results = engine.query_default("日本語", &docs);
    assert_eq!(results[0].document.id, "2");
    assert_eq!(results[0].highlighted_title.as_deref(), Some("<mark>日本語</mark>の検索"));

    // No panics slicing multi-byte text, whatever the outcome
    let _ = engine.query_default("sörting", &docs);
    let _ = engine.query_default("ö", &docs);
}

#[test]
fn test_apostrophes_and_punctuation() {
    let engine = SearchEngine::new();
    let results = engine.query_default("dijkstra's", &sample_catalog());
    assert_eq!(results[0].document.id, "dijkstra");
}

#[test]
fn test_borrowed_documents() {
    let owned = sample_catalog();
    let borrowed: Vec<&IndexedDocument> = owned.iter().collect();
    let engine: SearchEngine<&IndexedDocument> = SearchEngine::new();

    let results = engine.query_default("heap", &borrowed);
    assert_eq!(results[0].document.id, "heap-sort");
    assert!(std::ptr::eq(results[0].document, &owned[6]));
}

#[test]
fn test_shared_documents() {
    use std::sync::Arc;

    let docs: Vec<Arc<IndexedDocument>> = sample_catalog().into_iter().map(Arc::new).collect();
    let engine: SearchEngine<Arc<IndexedDocument>> = SearchEngine::new();

    let results = engine.query_default("heap", &docs);
    assert!(Arc::ptr_eq(&results[0].document, &docs[6]));
}
