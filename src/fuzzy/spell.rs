// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling correction against the index vocabulary.

use super::levenshtein::bounded_distance;
use crate::utils::normalize_token;

/// Vocabulary terms within `max_distance` edits of `word`, closest first.
///
/// `word` is normalized the same way index tokens are, so "Orgnic!" is
/// compared as "orgnic". A term at distance 0 is the word itself and is not
/// a correction, so it never appears. Ties on distance sort alphabetically.
/// At most `limit` terms come back.
pub fn suggest_corrections<'a>(
    word: &str,
    vocabulary: impl IntoIterator<Item = &'a str>,
    max_distance: usize,
    limit: usize,
) -> Vec<String> {
    let word = normalize_token(word);
    if word.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<(usize, &str)> = vocabulary
        .into_iter()
        .filter_map(|term| {
            bounded_distance(&word, term, max_distance)
                .filter(|&d| d > 0)
                .map(|d| (d, term))
        })
        .collect();

    candidates.sort_unstable_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    candidates
        .into_iter()
        .take(limit)
        .map(|(_, term)| term.to_string())
        .collect()
}
