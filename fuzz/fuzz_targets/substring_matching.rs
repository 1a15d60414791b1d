// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for Boyer–Moore substring search.
//!
//! Differential: every answer is checked against a naive scan. Arbitrary
//! Unicode goes in, so multi-byte chars and repeated patterns get hit hard.

#![no_main]

use arbitrary::Arbitrary;
use catalog_search::search::BoyerMoore;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct ScanInput {
    text: String,
    pattern: String,
}

fn naive_positions(text: &[char], pattern: &[char]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }
    (0..=text.len() - pattern.len())
        .filter(|&i| text[i..i + pattern.len()] == *pattern)
        .collect()
}

fuzz_target!(|input: ScanInput| {
    let text: Vec<char> = input.text.chars().take(200).collect();
    let pattern: Vec<char> = input.pattern.chars().take(20).collect();
    let (text_str, pattern_str): (String, String) = (text.iter().collect(), pattern.iter().collect());

    let matcher = BoyerMoore::new(&pattern_str);
    let expected = naive_positions(&text, &pattern);

    // INVARIANT 1: positions are exactly the naive ones, overlaps included
    assert_eq!(matcher.positions_in(&text_str), expected);

    // INVARIANT 2: count agrees with positions
    assert_eq!(matcher.count_in(&text_str), expected.len());

    // INVARIANT 3: find agrees, with the empty pattern found everywhere
    assert_eq!(matcher.find_in(&text_str), pattern.is_empty() || !expected.is_empty());
});
