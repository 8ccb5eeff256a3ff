//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sleuth::{IndexedDocument, SearchResult};

// Re-export canonical test utilities from sleuth::testing
pub use sleuth::testing::{make_doc, make_doc_with_category, sample_catalog};

/// Algorithm records in the CLI's input format.
pub const CATALOG_JSON: &str = r#"[
    {"name": "Binary Search", "category": "Searching",
     "description": "Find a value in a sorted array by halving the range",
     "complexity": {"time": "O(log n)", "space": "O(1)"},
     "tags": ["divide and conquer"], "useCases": ["lookup in sorted data"]},
    {"name": "Binary Search Tree", "category": "Trees",
     "description": "Ordered tree with left smaller and right larger keys",
     "tags": ["ordered"], "related": ["AVL Tree"]},
    {"name": "Merge Sort", "category": "Sorting",
     "description": "Split, sort halves, merge", "tags": ["stable"]},
    {"name": "Huffman Coding", "category": "Greedy",
     "description": "Optimal prefix codes from symbol frequencies",
     "tags": ["compression"]}
]"#;

/// Ids of results, in order.
pub fn ids<D: std::borrow::Borrow<IndexedDocument>>(results: &[SearchResult<D>]) -> Vec<String> {
    results
        .iter()
        .map(|r| r.document.borrow().id.clone())
        .collect()
}

/// Assert results are sorted by score descending and every score is in range.
pub fn assert_ranked(results: &[SearchResult]) {
    for window in results.windows(2) {
        assert!(
            window[0].score >= window[1].score,
            "results out of order: {} ({}) before {} ({})",
            window[0].document.id,
            window[0].score,
            window[1].document.id,
            window[1].score
        );
    }
    for r in results {
        assert!((0.0..=1.0).contains(&r.score), "score out of range: {}", r.score);
    }
}
