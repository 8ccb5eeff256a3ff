//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::BTreeSet;

use crate::types::{IndexedDocument, MatchKind, SearchResult};

/// Create a simple test document with just an id and a title.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: &str, title: &str) -> IndexedDocument {
    IndexedDocument::new(id, title)
}

/// Create a test document with category.
pub fn make_doc_with_category(id: &str, title: &str, category: &str) -> IndexedDocument {
    IndexedDocument::new(id, title).with_category(category)
}

/// Create a bare result around a fresh document.
pub fn make_result(id: &str, title: &str, score: f64, kind: MatchKind) -> SearchResult {
    SearchResult {
        document: make_doc(id, title),
        score,
        kind,
        highlighted_title: None,
        matched_fields: BTreeSet::new(),
        explanation: None,
    }
}

/// A small algorithm catalog covering every category the lexicon knows about.
pub fn sample_catalog() -> Vec<IndexedDocument> {
    vec![
        make_doc_with_category("binary-search", "Binary Search", "Searching")
            .with_tags(["divide and conquer", "logarithmic"])
            .with_summary("Find a value in a sorted array by halving the range"),
        make_doc_with_category("linear-search", "Linear Search", "Searching")
            .with_summary("Scan every element until the target is found"),
        make_doc_with_category("bst", "Binary Search Tree", "Trees")
            .with_tags(["ordered", "dynamic set"])
            .with_summary("Ordered tree with left smaller and right larger keys"),
        make_doc_with_category("avl", "AVL Tree", "Trees")
            .with_tags(["balanced", "rotations"])
            .with_summary("Self-balancing binary search tree"),
        make_doc_with_category("merge-sort", "Merge Sort", "Sorting")
            .with_tags(["stable", "divide and conquer"])
            .with_summary("Split, sort halves, merge"),
        make_doc_with_category("quick-sort", "Quick Sort", "Sorting")
            .with_tags(["in-place", "pivot"])
            .with_summary("Partition around a pivot and recurse"),
        make_doc_with_category("heap-sort", "Heap Sort", "Sorting")
            .with_tags(["in-place"])
            .with_summary("Build a max heap and repeatedly extract the root"),
        make_doc_with_category("bubble-sort", "Bubble Sort", "Sorting")
            .with_tags(["stable", "simple"]),
        make_doc_with_category("bfs", "Breadth First Search", "Graphs")
            .with_tags(["traversal", "queue"])
            .with_summary("Visit a graph level by level"),
        make_doc_with_category("dfs", "Depth First Search", "Graphs")
            .with_tags(["traversal", "stack"])
            .with_summary("Follow each branch as deep as possible"),
        make_doc_with_category("dijkstra", "Dijkstra's Algorithm", "Graphs")
            .with_tags(["shortest path", "greedy"])
            .with_summary("Single source shortest paths with non-negative weights"),
        make_doc_with_category("kruskal", "Kruskal's Algorithm", "Graphs")
            .with_tags(["minimum spanning tree", "greedy", "union find"]),
        make_doc_with_category("knapsack", "Knapsack Problem", "Dynamic Programming")
            .with_summary("Choose items to maximize value under a weight limit"),
        make_doc_with_category("lcs", "Longest Common Subsequence", "Dynamic Programming")
            .with_summary("Longest sequence present in both inputs in order"),
        make_doc_with_category("huffman", "Huffman Coding", "Greedy")
            .with_tags(["compression", "prefix codes"])
            .with_searchable_text("optimal prefix-free binary codes from symbol frequencies"),
    ]
}
