// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! Spell correction compares one query token against the whole vocabulary,
//! and most of that vocabulary fails this check before anything is allocated.
//!
//! All three functions use one rolling row and count `char`s, not bytes.

/// Classic Levenshtein distance: insertions, deletions and substitutions
/// each cost 1.
pub fn distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Distance if it is at most `max`, otherwise `None`.
///
/// Two early-exit paths:
/// 1. If length difference exceeds `max`, return immediately
/// 2. If the minimum of a DP row exceeds `max`, abandon the DP
///
/// Both are sound: every later row is at least the previous row's minimum.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a.chars().count();
    let b_len = b_chars.len();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    Some(dp[b_len]).filter(|&d| d <= max)
}

/// Are these strings within `max` edits of each other?
#[inline]
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    bounded_distance(a, b, max).is_some()
}
