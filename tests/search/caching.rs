//! Result caching through the engine.

use crate::common::{make_doc, sample_catalog};
use sleuth::{EngineConfig, ResultCache, SearchEngine};

#[test]
fn test_repeat_query_hits_cache() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();

    let first = engine.query_default("heap", &docs);
    let second = engine.query_default("heap", &docs);
    assert_eq!(first, second);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert!((stats.ratio - 0.5).abs() < 1e-9);
}

#[test]
fn test_key_is_normalized() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();

    engine.query_default("Binary Search", &docs);
    engine.query_default("  binary   SEARCH ", &docs);
    assert_eq!(engine.cache_stats().hits, 1);
}

#[test]
fn test_empty_results_not_cached() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();

    engine.query_default("xylophone", &docs);
    engine.query_default("xylophone", &docs);
    let stats = engine.cache_stats();
    assert_eq!(stats.hits, 0);
    assert_eq!(stats.misses, 2);
}

#[test]
fn test_single_char_query_skips_cache() {
    let engine = SearchEngine::new();
    let docs = vec![make_doc("1", "Heap")];

    engine.query_default("h", &docs);
    engine.query_default("h", &docs);
    let stats = engine.cache_stats();
    assert_eq!(stats.hits + stats.misses, 0);
}

#[test]
fn test_clear_cache_keeps_counters() {
    let engine = SearchEngine::new();
    let docs = sample_catalog();

    engine.query_default("heap", &docs);
    engine.query_default("heap", &docs);
    engine.clear_cache();
    engine.query_default("heap", &docs);

    let stats = engine.cache_stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 2);
}

#[test]
fn test_stale_results_until_cleared() {
    let engine = SearchEngine::new();
    let before = vec![make_doc("1", "Heap")];
    let after = vec![make_doc("2", "Heap Sort")];

    engine.query_default("heap", &before);
    let cached = engine.query_default("heap", &after);
    assert_eq!(cached[0].document.id, "1");

    engine.clear_cache();
    let fresh = engine.query_default("heap", &after);
    assert_eq!(fresh[0].document.id, "2");
}

#[test]
fn test_small_capacity_evicts_oldest() {
    let config = EngineConfig {
        cache_capacity: 2,
        ..EngineConfig::default()
    };
    let engine: SearchEngine = SearchEngine::with_config(config).unwrap();
    let docs = sample_catalog();

    engine.query_default("heap", &docs);
    engine.query_default("merge", &docs);
    engine.query_default("quick", &docs);
    // "heap" was the oldest entry and went first
    engine.query_default("heap", &docs);
    engine.query_default("quick", &docs);

    let stats = engine.cache_stats();
    assert_eq!(stats.misses, 4);
    assert_eq!(stats.hits, 1);
}

#[test]
fn test_cache_never_exceeds_capacity() {
    let mut cache = ResultCache::new(10);
    for i in 0..100 {
        cache.put(&format!("query {i}"), vec![i]);
        assert!(cache.len() <= cache.capacity());
    }
    assert!(cache.get("query 99").is_some());
    assert!(cache.get("query 0").is_none());
}
