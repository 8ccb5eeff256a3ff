//! Selection history, preferences, suggestions and sessions.

use crate::common::{ids, make_doc, make_doc_with_category, sample_catalog};
use sleuth::{SearchEngine, SearchOptions};

fn sort_docs() -> Vec<sleuth::IndexedDocument> {
    vec![make_doc("a", "Alpha Sort"), make_doc("b", "Beta Sort")]
}

#[test]
fn test_shorter_title_wins_without_history() {
    let engine = SearchEngine::new();
    assert_eq!(ids(&engine.query_default("sort", &sort_docs())), ["b", "a"]);
}

#[test]
fn test_selection_boosts_document() {
    let engine = SearchEngine::new();
    let docs = sort_docs();
    engine.record_selection("sort", &docs[0]);

    let results = engine.query_default("sort", &docs);
    assert_eq!(ids(&results), ["a", "b"]);
    let explanation = results[0].explanation.as_deref().unwrap();
    assert!(explanation.contains("sort"), "{explanation}");
}

#[test]
fn test_contextual_search_can_be_disabled() {
    let engine = SearchEngine::new();
    let docs = sort_docs();
    engine.record_selection("sort", &docs[0]);

    let options = SearchOptions {
        enable_contextual_search: false,
        ..SearchOptions::default()
    };
    assert_eq!(ids(&engine.query("sort", &docs, &options)), ["b", "a"]);
}

#[test]
fn test_boost_never_lifts_a_non_match() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("a", "Alpha Sort"), make_doc("z", "Zebra")];
    engine.record_selection("sort", &docs[1]);

    assert_eq!(ids(&engine.query_default("sort", &docs)), ["a"]);
}

#[test]
fn test_clear_context_removes_boost() {
    let engine = SearchEngine::new();
    let docs = sort_docs();
    engine.record_selection("sort", &docs[0]);
    engine.clear_context();

    assert!(engine.search_history().is_empty());
    assert_eq!(ids(&engine.query_default("sort", &docs)), ["b", "a"]);
}

#[test]
fn test_history_newest_first() {
    let engine: SearchEngine = SearchEngine::new();
    let doc = make_doc("1", "Heap");
    engine.record_selection("Heap", &doc);
    engine.record_selection("priority queue", &doc);

    assert_eq!(engine.search_history(), ["priority queue", "heap"]);
}

#[test]
fn test_suggestions_blend_queries_and_categories() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();
    engine.query_default("graph", &docs);
    engine.query_default("graph", &docs);
    engine.query_default("greedy", &docs);
    engine.record_selection("graph", &make_doc_with_category("x", "X", "Graphs"));

    let suggestions = engine.suggestions("gr");
    assert_eq!(suggestions[0], "graph");
    assert!(suggestions.contains(&"greedy".to_string()));
    assert!(suggestions.contains(&"Graphs".to_string()));
    assert!(suggestions.len() <= 8);

    let unique: std::collections::HashSet<_> = suggestions.iter().map(|s| s.to_lowercase()).collect();
    assert_eq!(unique.len(), suggestions.len());
    assert!(engine.suggestions("zz").is_empty());
}

#[test]
fn test_sessions_track_queries_and_selections() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();

    engine.query_default("heap", &docs);
    engine.start_session("alice");
    engine.query_default("merge", &docs);
    engine.record_selection("merge", &docs[4]);

    let default = engine.session("default").unwrap();
    assert_eq!(default.queries, ["heap"]);

    let alice = engine.session("alice").unwrap();
    assert_eq!(alice.queries, ["merge"]);
    assert_eq!(alice.selections, ["merge-sort"]);

    assert!(engine.session("bob").is_none());
    assert_eq!(engine.analytics_snapshot().session_count, 2);
}
