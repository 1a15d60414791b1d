// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boyer–Moore substring search with the bad-character rule.
//!
//! The pattern is compared right to left. On a mismatch at pattern position
//! `j` against text character `c`, the window jumps so that the rightmost
//! `c` in the pattern lines up with it - or past it entirely if the pattern
//! has no `c`. Long patterns over varied text skip most of the text.
//!
//! The bad-character table is a `HashMap<char, usize>`, not a 256-entry
//! array, so it is correct for any alphabet. Positions are in `char`s, not
//! bytes: "crème" has length 5 here.
//!
//! After a full match the window advances by exactly one, so overlapping
//! occurrences are all counted: "ana" occurs twice in "banana".

use std::collections::HashMap;

/// A pattern preprocessed for repeated searching.
///
/// Build once, run against every item name in a scan.
#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pattern: Vec<char>,
    last_occurrence: HashMap<char, usize>,
}

impl BoyerMoore {
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().collect();
        let mut last_occurrence = HashMap::with_capacity(pattern.len());
        for (i, &c) in pattern.iter().enumerate() {
            last_occurrence.insert(c, i);
        }
        Self {
            pattern,
            last_occurrence,
        }
    }

    /// Pattern length in chars.
    #[inline]
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// How far to slide after a mismatch at pattern index `j` against `c`.
    #[inline]
    fn bad_char_shift(&self, j: usize, c: char) -> usize {
        match self.last_occurrence.get(&c) {
            // Rightmost occurrence left of j: align it under c.
            Some(&last) if last < j => j - last,
            // Rightmost occurrence at or right of j: the rule would move
            // backwards, so creep forward by one.
            Some(_) => 1,
            // Not in the pattern: slide past c entirely.
            None => j + 1,
        }
    }

    /// Run the scan, calling `on_match` with each match start (in chars).
    ///
    /// `on_match` returns whether to keep scanning.
    fn scan(&self, text: &[char], mut on_match: impl FnMut(usize) -> bool) {
        let m = self.pattern.len();
        let n = text.len();
        if m == 0 || m > n {
            return;
        }

        let mut shift = 0;
        while shift <= n - m {
            let mut j = m;
            while j > 0 && self.pattern[j - 1] == text[shift + j - 1] {
                j -= 1;
            }

            if j == 0 {
                if !on_match(shift) {
                    return;
                }
                shift += 1;
            } else {
                shift += self.bad_char_shift(j - 1, text[shift + j - 1]);
            }
        }
    }

    /// Does the pattern occur in `text`? An empty pattern always does.
    pub fn find_in(&self, text: &str) -> bool {
        if self.pattern.is_empty() {
            return true;
        }
        let text: Vec<char> = text.chars().collect();
        let mut found = false;
        self.scan(&text, |_| {
            found = true;
            false
        });
        found
    }

    /// Count every occurrence in `text`, overlapping ones included.
    ///
    /// An empty pattern counts zero occurrences.
    pub fn count_in(&self, text: &str) -> usize {
        if self.pattern.is_empty() {
            return 0;
        }
        let text: Vec<char> = text.chars().collect();
        let mut count = 0;
        self.scan(&text, |_| {
            count += 1;
            true
        });
        count
    }

    /// Start positions (in chars) of every occurrence.
    pub fn positions_in(&self, text: &str) -> Vec<usize> {
        let text: Vec<char> = text.chars().collect();
        let mut positions = Vec::new();
        self.scan(&text, |pos| {
            positions.push(pos);
            true
        });
        positions
    }
}

/// One-shot containment check.
pub fn contains(text: &str, pattern: &str) -> bool {
    BoyerMoore::new(pattern).find_in(text)
}

/// One-shot overlapping occurrence count.
pub fn count_occurrences(text: &str, pattern: &str) -> usize {
    BoyerMoore::new(pattern).count_in(text)
}
