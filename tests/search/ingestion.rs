//! Searching documents built from algorithm records.

use crate::common::{ids, CATALOG_JSON};
use sleuth::{ingest_json, MatchedField, SearchEngine};

#[test]
fn test_ingested_ids_and_fields() {
    let docs = ingest_json(CATALOG_JSON).unwrap();
    assert_eq!(
        docs.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
        ["binary-search", "binary-search-tree", "merge-sort", "huffman-coding"]
    );
    let text = docs[0].searchable_text.as_deref().unwrap();
    assert!(text.contains("time O(log n)"));
    assert!(text.contains("lookup in sorted data"));
}

#[test]
fn test_search_ingested_catalog() {
    let docs = ingest_json(CATALOG_JSON).unwrap();
    let engine = SearchEngine::new();

    let results = engine.query_default("Binary Search", &docs);
    assert_eq!(&ids(&results)[..2], ["binary-search", "binary-search-tree"]);
}

#[test]
fn test_tag_and_jargon_through_ingestion() {
    let docs = ingest_json(CATALOG_JSON).unwrap();
    let engine = SearchEngine::new();

    let results = engine.query_default("compression", &docs);
    assert_eq!(results[0].document.id, "huffman-coding");
    assert!(results[0].matched_fields.contains(&MatchedField::Tags));
}
