//! Ranking order across a realistic catalog.

use crate::common::{assert_ranked, ids, make_doc, sample_catalog};
use sleuth::{MatchKind, MatchedField, SearchEngine};

#[test]
fn test_exact_title_ranks_first() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("1", "Binary Search")];
    let results = engine.query_default("Binary Search", &docs);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[0].kind, MatchKind::Exact);
    assert_eq!(
        results[0].highlighted_title.as_deref(),
        Some("<mark>Binary Search</mark>")
    );
}

#[test]
fn test_prefix_is_exact_kind() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("1", "Binary Search Tree")];
    let results = engine.query_default("Bin", &docs);

    assert!((results[0].score - 0.9).abs() < 1e-9);
    assert_eq!(results[0].kind, MatchKind::Exact);
}

#[test]
fn test_exact_beats_prefix() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();
    let results = engine.query_default("binary search", &docs);

    assert_ranked(&results);
    assert_eq!(results[0].document.id, "binary-search");
    let bst = results.iter().find(|r| r.document.id == "bst").unwrap();
    assert!((bst.score - 0.9).abs() < 1e-9);
    assert_eq!(bst.kind, MatchKind::Exact);
    assert!(results[0].score > bst.score);
}

#[test]
fn test_category_query_finds_members() {
    let engine = SearchEngine::new();
    let results = engine.query_default("sorting", &sample_catalog());

    assert_ranked(&results);
    let found = ids(&results);
    for id in ["merge-sort", "quick-sort", "heap-sort", "bubble-sort"] {
        assert!(found.contains(&id.to_string()), "missing {id} in {found:?}");
    }
    let merge = results.iter().find(|r| r.document.id == "merge-sort").unwrap();
    assert!(merge.matched_fields.contains(&MatchedField::Category));
}

#[test]
fn test_every_result_is_explained() {
    let engine = SearchEngine::new();
    let results = engine.query_default("graph traversal", &sample_catalog());
    assert!(!results.is_empty());
    for r in &results {
        assert!(r.explanation.is_some(), "{} has no explanation", r.document.id);
        assert!(!r.matched_fields.is_empty(), "{} has no matched fields", r.document.id);
    }
}

#[test]
fn test_results_capped_at_max() {
    let engine = SearchEngine::new();
    let docs: Vec<_> = (0..40)
        .map(|i| make_doc(&i.to_string(), &format!("Sort variant {i}")))
        .collect();
    let results = engine.query_default("sort", &docs);
    assert_eq!(results.len(), 10);
    assert_ranked(&results);
}
