//! Each fallback strategy, seen through the engine.

use crate::common::{ids, make_doc, sample_catalog};
use sleuth::{MatchKind, MatchedField, SearchEngine, SearchOptions};

#[test]
fn test_abbreviation_finds_expansion() {
    let engine = SearchEngine::new();
    let results = engine.query_default("bst", &sample_catalog());

    assert_eq!(results[0].document.id, "bst");
    assert!((results[0].score - 0.85).abs() < 1e-9);
    assert_eq!(results[0].kind, MatchKind::Partial);
    assert!(results[0]
        .explanation
        .as_deref()
        .is_some_and(|e| e.contains("binary search tree")));
}

#[test]
fn test_jargon_finds_stable_sorts() {
    let engine = SearchEngine::new();
    let results = engine.query_default("stable", &sample_catalog());
    let found = ids(&results);

    assert!(found.contains(&"merge-sort".to_string()), "{found:?}");
    assert!(found.contains(&"bubble-sort".to_string()), "{found:?}");
    let merge = results.iter().find(|r| r.document.id == "merge-sort").unwrap();
    assert!(merge.matched_fields.contains(&MatchedField::Tags));
}

#[test]
fn test_synonym_match() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("1", "Network Flow")];
    let results = engine.query_default("graph", &docs);

    assert_eq!(results.len(), 1);
    assert!((results[0].score - 0.5).abs() < 1e-9, "got {}", results[0].score);
    assert_eq!(results[0].kind, MatchKind::Fuzzy);
    let explanation = results[0].explanation.as_deref().unwrap();
    assert!(explanation.starts_with("synonym"), "{explanation}");
    assert!(explanation.contains("network"));
}

#[test]
fn test_natural_language_query_turns_synonyms_back_on() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("1", "Network Flow")];
    let options = SearchOptions {
        enable_synonym_search: false,
        ..SearchOptions::default()
    };
    let results = engine.query("graph", &docs, &options);

    assert_eq!(results.len(), 1);
    assert!((results[0].score - 0.5).abs() < 1e-9, "got {}", results[0].score);
    assert!(results[0]
        .explanation
        .as_deref()
        .is_some_and(|e| e.starts_with("synonym")));
}

#[test]
fn test_phonetic_misspelling() {
    let engine = SearchEngine::new();
    let results = engine.query_default("hufman", &sample_catalog());

    assert_eq!(results[0].document.id, "huffman");
    assert!((results[0].score - 0.8).abs() < 1e-9, "got {}", results[0].score);
    assert!(results[0]
        .explanation
        .as_deref()
        .is_some_and(|e| e.starts_with("sounds like")));
}

#[test]
fn test_word_order_ignored() {
    let engine = SearchEngine::new();
    let results = engine.query_default("search binary", &sample_catalog());

    let top = &results[0];
    assert!(
        top.document.id == "binary-search" || top.document.id == "bst",
        "unexpected top result {}",
        top.document.id
    );
    assert!(ids(&results).contains(&"binary-search".to_string()));
}
