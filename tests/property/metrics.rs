//! Edit distance, similarity and n-gram properties.

use proptest::prelude::*;
use sleuth::{edit_distance, levenshtein_within, ngram_similarity, phonetic_code, similarity};

/// Short words over a small alphabet so random pairs actually overlap.
fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-e]{0,8}").unwrap()
}

/// Words with multi-byte characters mixed in.
fn unicode_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[aéöü日本]{0,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_distance_identity(a in word()) {
        prop_assert_eq!(edit_distance(&a, &a), 0);
    }

    #[test]
    fn prop_distance_symmetric(a in word(), b in word()) {
        prop_assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
    }

    #[test]
    fn prop_distance_triangle(a in word(), b in word(), c in word()) {
        prop_assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }

    #[test]
    fn prop_distance_bounded_by_longer(a in unicode_word(), b in unicode_word()) {
        let longest = a.chars().count().max(b.chars().count());
        prop_assert!(edit_distance(&a, &b) <= longest);
    }

    /// The bounded check must agree with the full computation.
    #[test]
    fn prop_within_matches_distance(a in word(), b in word(), max in 0usize..4) {
        prop_assert_eq!(levenshtein_within(&a, &b, max), edit_distance(&a, &b) <= max);
    }

    #[test]
    fn prop_similarity_in_unit_interval(a in unicode_word(), b in unicode_word()) {
        let s = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s), "similarity {} out of range", s);
    }

    #[test]
    fn prop_similarity_self_is_one(a in unicode_word()) {
        prop_assert_eq!(similarity(&a, &a), 1.0);
    }

    #[test]
    fn prop_ngram_in_unit_interval(a in word(), b in word()) {
        let s = ngram_similarity(&a, &b, 2);
        prop_assert!((0.0..=1.0).contains(&s));
        prop_assert_eq!(s, ngram_similarity(&b, &a, 2));
    }

    #[test]
    fn prop_phonetic_codes_are_stable(a in "[a-z]{1,10}") {
        let codes = phonetic_code(&a);
        prop_assert_eq!(&codes, &phonetic_code(&a.to_uppercase()));
        prop_assert!(codes.soundex.len() == 4 || codes.soundex.is_empty());
    }
}
