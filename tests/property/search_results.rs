//! Search result invariants over random queries and catalogs.

use crate::common::{assert_ranked, make_doc, sample_catalog};
use proptest::prelude::*;
use sleuth::{IndexedDocument, SearchEngine, SearchOptions};
use std::collections::HashSet;

fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[a-z ]{0,16}").unwrap(),
        prop::sample::select(vec![
            "binary".to_string(),
            "sort".to_string(),
            "bst".to_string(),
            "sercah".to_string(),
            "graph path".to_string(),
            "Dijkstra's".to_string(),
        ]),
    ]
}

fn catalog() -> impl Strategy<Value = Vec<IndexedDocument>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z]{2,8}( [A-Za-z]{2,8}){0,3}").unwrap(),
        0..30,
    )
    .prop_map(|titles| {
        titles
            .into_iter()
            .enumerate()
            .map(|(i, title)| make_doc(&i.to_string(), &title))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_results_ranked_and_bounded(q in query(), docs in catalog(), max in 1usize..20) {
        let engine = SearchEngine::new();
        let options = SearchOptions { max_results: max, ..SearchOptions::default() };
        let results = engine.query(&q, &docs, &options);

        assert_ranked(&results);
        prop_assert!(results.len() <= max);
        for r in &results {
            prop_assert!(r.score >= options.min_score);
        }
    }

    #[test]
    fn prop_each_document_once(q in query()) {
        let engine = SearchEngine::new();
        let results = engine.query_default(&q, &sample_catalog());
        let unique: HashSet<_> = results.iter().map(|r| r.document.id.clone()).collect();
        prop_assert_eq!(unique.len(), results.len());
    }

    #[test]
    fn prop_repeatable(q in query(), docs in catalog()) {
        let first = SearchEngine::new().query_default(&q, &docs);
        let second = SearchEngine::new().query_default(&q, &docs);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_highlight_preserves_title(q in query()) {
        let engine = SearchEngine::new();
        for r in engine.query_default(&q, &sample_catalog()) {
            if let Some(marked) = &r.highlighted_title {
                let stripped = marked.replace("<mark>", "").replace("</mark>", "");
                prop_assert_eq!(stripped, r.document.title.clone());
            }
        }
    }
}
