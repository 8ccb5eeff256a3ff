//! Same inputs, same outputs: across calls, engines and cache states.

use crate::common::{assert_ranked, sample_catalog};
use sleuth::{normalize, MatchKind, SearchEngine};

const QUERIES: &[&str] = &[
    "binary search",
    "sort",
    "bst",
    "graph traversal",
    "stable",
    "hufman",
    "sercah",
    "shortest path",
    "he",
    "DP",
];

#[test]
fn test_fresh_engines_agree() {
    let docs = sample_catalog();
    for query in QUERIES {
        let a = SearchEngine::new().query_default(query, &docs);
        let b = SearchEngine::new().query_default(query, &docs);
        assert_eq!(a, b, "results differ for {query:?}");
    }
}

#[test]
fn test_cached_and_recomputed_agree() {
    let docs = sample_catalog();
    let engine = SearchEngine::new();
    for query in QUERIES {
        let first = engine.query_default(query, &docs);
        let cached = engine.query_default(query, &docs);
        engine.clear_cache();
        let recomputed = engine.query_default(query, &docs);
        assert_eq!(first, cached, "cache changed results for {query:?}");
        assert_eq!(first, recomputed, "recompute changed results for {query:?}");
    }
}

#[test]
fn test_ties_break_by_kind_then_title() {
    let docs = sample_catalog();
    let engine = SearchEngine::new();
    for query in QUERIES {
        let results = engine.query_default(query, &docs);
        assert_ranked(&results);
        for pair in results.windows(2) {
            if pair[0].score == pair[1].score {
                let kinds = (pair[0].kind, pair[1].kind);
                assert!(kinds.0 <= kinds.1, "{query:?}: {kinds:?}");
                if kinds.0 == kinds.1 {
                    let titles = (normalize(&pair[0].document.title), normalize(&pair[1].document.title));
                    assert!(titles.0 <= titles.1, "{query:?}: {titles:?}");
                }
            }
        }
    }
}

#[test]
fn test_document_order_does_not_matter() {
    let docs = sample_catalog();
    let mut reversed = docs.clone();
    reversed.reverse();

    for query in QUERIES {
        let forward = SearchEngine::new().query_default(query, &docs);
        let backward = SearchEngine::new().query_default(query, &reversed);
        assert_eq!(forward, backward, "order dependence for {query:?}");
    }
}

#[test]
fn test_kinds_match_score_bands() {
    let docs = sample_catalog();
    let engine = SearchEngine::new();
    for query in QUERIES {
        for r in engine.query_default(query, &docs) {
            match r.kind {
                MatchKind::Exact => assert!(r.score >= 0.9),
                MatchKind::Partial => assert!(r.score >= 0.6 && r.score < 0.9),
                MatchKind::Fuzzy => assert!(r.score >= 0.4 && r.score < 0.6),
                MatchKind::Suggested => {}
                _ => assert!(r.score < 0.4, "{query:?}: {:?} at {}", r.kind, r.score),
            }
        }
    }
}
