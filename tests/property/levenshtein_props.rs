//! Edit distance and spelling correction properties.
//!
//! The metric axioms (identity, symmetry, triangle inequality) plus
//! agreement between the rolling-row, bounded and table implementations.

use crate::oracles::oracle_levenshtein;
use crate::word_strategy;
use catalog_search::fuzzy::{bounded_distance, distance, levenshtein_within, suggest_corrections};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_distance_matches_oracle(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), oracle_levenshtein(&a, &b));
    }

    #[test]
    fn prop_identity(a in word_strategy()) {
        prop_assert_eq!(distance(&a, &a), 0);
    }

    #[test]
    fn prop_symmetry(a in word_strategy(), b in word_strategy()) {
        prop_assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn prop_triangle_inequality(a in word_strategy(), b in word_strategy(), c in word_strategy()) {
        prop_assert!(distance(&a, &c) <= distance(&a, &b) + distance(&b, &c));
    }

    /// Property: length difference is a lower bound, longer length an upper bound.
    #[test]
    fn prop_length_bounds(a in word_strategy(), b in word_strategy()) {
        let (la, lb) = (a.chars().count(), b.chars().count());
        let d = distance(&a, &b);
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert!(d <= la.max(lb));
    }

    /// Property: the bounded variant agrees with the full one inside the bound
    /// and reports `None` outside it.
    #[test]
    fn prop_bounded_agrees(a in word_strategy(), b in word_strategy(), max in 0usize..5) {
        let full = distance(&a, &b);
        let bounded = bounded_distance(&a, &b, max);
        if full <= max {
            prop_assert_eq!(bounded, Some(full));
        } else {
            prop_assert_eq!(bounded, None);
        }
        prop_assert_eq!(levenshtein_within(&a, &b, max), full <= max);
    }

    /// Property: corrections are within range, never the word itself,
    /// sorted by distance, and capped.
    #[test]
    fn prop_corrections_well_formed(
        word in word_strategy(),
        vocabulary in prop::collection::vec(word_strategy(), 0..30),
        limit in 0usize..6,
    ) {
        let found = suggest_corrections(&word, vocabulary.iter().map(String::as_str), 2, limit);
        prop_assert!(found.len() <= limit);

        let distances: Vec<usize> = found.iter().map(|s| distance(&word, s)).collect();
        for (s, d) in found.iter().zip(&distances) {
            prop_assert!(vocabulary.contains(s));
            prop_assert!(*d >= 1 && *d <= 2, "'{}' at distance {}", s, d);
        }
        prop_assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    }
}
