// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction and lookup.
//!
//! Maps each normalized name token to the set of item ids whose name contains
//! it. One hash probe per query token, so keyword search costs the same
//! whether the catalog has a hundred items or a million.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **TOKENS_NORMALIZED**: every key is lowercase `[a-z0-9]+`
//! 2. **NON_EMPTY**: every key maps to at least one id
//! 3. **IDS_COLLAPSE**: an id appears at most once per key (it's a set)

use crate::config::DEFAULT_MIN_TOKEN_LEN;
use crate::types::CatalogItem;
use crate::utils::normalize_token;
use std::collections::{HashMap, HashSet};

/// Split a name into index tokens.
///
/// Lowercases, splits on whitespace, keeps words of at least `min_len`
/// characters (measured before punctuation is stripped), then strips
/// everything outside `[a-z0-9]`. Words that strip down to nothing are
/// dropped.
pub fn tokenize_name(name: &str, min_len: usize) -> Vec<String> {
    name.to_lowercase()
        .split_whitespace()
        .filter(|word| word.chars().count() >= min_len)
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Token → item ids.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    terms: HashMap<String, HashSet<String>>,
    min_token_len: usize,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::with_min_token_len(DEFAULT_MIN_TOKEN_LEN)
    }

    pub fn with_min_token_len(min_token_len: usize) -> Self {
        Self {
            terms: HashMap::new(),
            min_token_len,
        }
    }

    /// Build a fresh index over these items.
    pub fn build<'a>(items: impl IntoIterator<Item = &'a CatalogItem>, min_token_len: usize) -> Self {
        let mut index = Self::with_min_token_len(min_token_len);
        index.rebuild(items);
        index
    }

    /// Clear and re-index every item's name.
    pub fn rebuild<'a>(&mut self, items: impl IntoIterator<Item = &'a CatalogItem>) {
        self.terms.clear();
        for item in items {
            for token in tokenize_name(&item.name, self.min_token_len) {
                self.terms.entry(token).or_default().insert(item.id.clone());
            }
        }
    }

    /// Ids for a token, normalized the same way index keys are.
    ///
    /// Empty set if the token is unknown.
    pub fn lookup(&self, token: &str) -> HashSet<String> {
        self.get(&normalize_token(token)).cloned().unwrap_or_default()
    }

    /// Borrowing lookup for an already-normalized token.
    #[inline]
    pub fn get(&self, normalized: &str) -> Option<&HashSet<String>> {
        self.terms.get(normalized)
    }

    #[inline]
    pub fn contains_token(&self, normalized: &str) -> bool {
        self.terms.contains_key(normalized)
    }

    /// Every indexed token. This is the spell corrector's dictionary.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.terms.keys().map(String::as_str)
    }

    /// All ids referenced by any token.
    pub fn indexed_ids(&self) -> HashSet<&str> {
        self.terms
            .values()
            .flat_map(|ids| ids.iter().map(String::as_str))
            .collect()
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Forget an item without touching anything else.
    #[cfg(test)]
    pub(crate) fn remove_item(&mut self, id: &str) {
        self.terms.retain(|_, ids| {
            ids.remove(id);
            !ids.is_empty()
        });
    }
}
