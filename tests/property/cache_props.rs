//! Result cache bounds.

use proptest::prelude::*;
use sleuth::ResultCache;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_len_never_exceeds_capacity(
        capacity in 0usize..20,
        keys in prop::collection::vec("[a-z]{0,4}", 0..100),
    ) {
        let mut cache = ResultCache::new(capacity);
        for key in &keys {
            cache.put(key, vec![key.clone()]);
            prop_assert!(cache.len() <= cache.capacity());
        }
        prop_assert!(cache.capacity() >= 1);
    }

    #[test]
    fn prop_latest_put_is_readable(keys in prop::collection::vec("[a-z]{2,4}", 1..50)) {
        let mut cache = ResultCache::new(5);
        for key in &keys {
            cache.put(key, vec![key.len()]);
        }
        let last = keys.last().unwrap();
        prop_assert_eq!(cache.get(last), Some(vec![last.len()]));
    }

    #[test]
    fn prop_stats_count_every_cacheable_lookup(keys in prop::collection::vec("[a-z]{2,4}", 0..50)) {
        let mut cache: ResultCache<u8> = ResultCache::new(10);
        for key in &keys {
            cache.get(key);
        }
        let stats = cache.stats();
        prop_assert_eq!(stats.hits + stats.misses, keys.len() as u64);
    }
}
