//! Boyer–Moore properties, checked against a naive scan.

use crate::oracles::oracle_positions;
use crate::{dense_word_strategy, name_strategy};
use catalog_search::search::{contains, count_occurrences, BoyerMoore};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: positions match the naive scan, overlaps included.
    #[test]
    fn prop_positions_match_oracle(
        text in dense_word_strategy(),
        pattern in "[ab]{1,4}",
    ) {
        let matcher = BoyerMoore::new(&pattern);
        prop_assert_eq!(matcher.positions_in(&text), oracle_positions(&text, &pattern));
    }

    /// Property: contains and count agree with the naive scan.
    #[test]
    fn prop_count_and_contains_match_oracle(
        text in dense_word_strategy(),
        pattern in "[ab]{1,5}",
    ) {
        let expected = oracle_positions(&text, &pattern).len();
        prop_assert_eq!(count_occurrences(&text, &pattern), expected);
        prop_assert_eq!(contains(&text, &pattern), expected > 0);
    }

    /// Property: every substring of a name is found in it.
    #[test]
    fn prop_every_substring_found(name in name_strategy(), a in 0usize..40, b in 0usize..40) {
        let chars: Vec<char> = name.chars().collect();
        let start = a.min(b).min(chars.len());
        let end = a.max(b).min(chars.len());
        let needle: String = chars[start..end].iter().collect();
        prop_assert!(contains(&name, &needle));
    }

    /// Property: a pattern longer than the text never matches.
    #[test]
    fn prop_longer_pattern_never_matches(text in "[a-z]{0,6}", extra in "[a-z]{1,3}") {
        let pattern = format!("{}{}", text, extra);
        prop_assert!(!contains(&text, &pattern));
        prop_assert_eq!(count_occurrences(&text, &pattern), 0);
    }
}

#[test]
fn test_empty_pattern_conventions() {
    assert!(contains("anything", ""));
    assert_eq!(count_occurrences("anything", ""), 0);
}
