// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snapshot: everything derived from one reload, built together.
//!
//! A snapshot is built completely before anyone can see it, then published
//! by swapping one `Arc`. Queries hold the `Arc` they started with, so a
//! query that overlaps a reload reads the old snapshot from start to finish
//! and never a mix of old index and new scores.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **IDS_UNIQUE**: no two items share an id (build fails otherwise)
//! 2. **INDEX_RESOLVES**: every id in the inverted index names an item
//! 3. **SCORED**: every item has a relevance score, and nothing else does
//! 4. **SORTED**: `items` is in ascending id order
//!
//! The trie is the one part that changes after publication: query tracking
//! inserts into it. That never touches invariants 1-4.

use crate::config::EngineConfig;
use crate::error::{CatalogError, Result};
use crate::index::{InvertedIndex, PrefixTrie};
use crate::scoring::RelevanceScores;
use crate::types::CatalogItem;
use crate::utils::paginate;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Counts describing a snapshot, for logs and `inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotStats {
    pub generation: u64,
    pub items: usize,
    pub vocabulary: usize,
    pub categories: usize,
    pub stores: usize,
    pub trie_terms: usize,
}

/// The complete, internally consistent set of structures from one reload.
#[derive(Debug, Default)]
pub struct Snapshot {
    items: Vec<CatalogItem>,
    by_id: HashMap<String, usize>,
    by_category: HashMap<String, Vec<usize>>,
    by_store: HashMap<String, Vec<usize>>,
    inverted: InvertedIndex,
    scores: RelevanceScores,
    trie: PrefixTrie,
    generation: u64,
}

impl Snapshot {
    /// Empty snapshot, published before the first successful reload.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build every structure from a full item list.
    ///
    /// Fails with [`CatalogError::DuplicateId`] if two items share an id.
    pub fn build(mut items: Vec<CatalogItem>, config: &EngineConfig, generation: u64) -> Result<Self> {
        items.sort_by(|a, b| a.id.cmp(&b.id));
        if let Some(pair) = items.windows(2).find(|pair| pair[0].id == pair[1].id) {
            let id = pair[0].id.clone();
            warn!(%id, "duplicate item identifier in catalog");
            return Err(CatalogError::DuplicateId { id });
        }

        let mut by_id = HashMap::with_capacity(items.len());
        let mut by_category: HashMap<String, Vec<usize>> = HashMap::new();
        let mut by_store: HashMap<String, Vec<usize>> = HashMap::new();
        let trie = PrefixTrie::new();

        for (idx, item) in items.iter().enumerate() {
            by_id.insert(item.id.clone(), idx);
            by_category.entry(item.category.clone()).or_default().push(idx);
            by_store.entry(item.store_name.clone()).or_default().push(idx);

            // Whole name, then each longer word on its own.
            trie.insert(&item.name);
            for word in item.name.to_lowercase().split_whitespace() {
                if word.chars().count() >= config.min_token_len {
                    trie.insert(word);
                }
            }
        }

        let inverted = InvertedIndex::build(&items, config.min_token_len);
        let scores = RelevanceScores::build(&items);

        Ok(Self {
            items,
            by_id,
            by_category,
            by_store,
            inverted,
            scores,
            trie,
            generation,
        })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// All items, ascending by id.
    #[inline]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn item(&self, id: &str) -> Option<&CatalogItem> {
        self.by_id.get(id).map(|&idx| &self.items[idx])
    }

    #[inline]
    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    #[inline]
    pub fn scores(&self) -> &RelevanceScores {
        &self.scores
    }

    #[inline]
    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One page of all items in id order.
    pub fn page(&self, page: usize, size: usize) -> Vec<CatalogItem> {
        paginate(&self.items, page, size)
    }

    /// One page of a category (exact match), id order.
    pub fn category_page(&self, category: &str, page: usize, size: usize) -> Vec<CatalogItem> {
        self.group_page(self.by_category.get(category), page, size)
    }

    /// One page of a store (exact match), id order.
    pub fn store_page(&self, store: &str, page: usize, size: usize) -> Vec<CatalogItem> {
        self.group_page(self.by_store.get(store), page, size)
    }

    fn group_page(&self, group: Option<&Vec<usize>>, page: usize, size: usize) -> Vec<CatalogItem> {
        let Some(group) = group else {
            return Vec::new();
        };
        paginate(group, page, size)
            .into_iter()
            .map(|idx| self.items[idx].clone())
            .collect()
    }

    /// Distinct store names, sorted.
    pub fn stores(&self) -> Vec<&str> {
        let mut stores: Vec<&str> = self.by_store.keys().map(String::as_str).collect();
        stores.sort_unstable();
        stores
    }

    pub fn stats(&self) -> SnapshotStats {
        SnapshotStats {
            generation: self.generation,
            items: self.items.len(),
            vocabulary: self.inverted.len(),
            categories: self.by_category.len(),
            stores: self.by_store.len(),
            trie_terms: self.trie.len(),
        }
    }

    /// Check the snapshot invariants.
    /// Returns error string if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        for pair in self.items.windows(2) {
            if pair[0].id >= pair[1].id {
                return Some(format!(
                    "Items out of order or duplicated: '{}' then '{}'",
                    pair[0].id, pair[1].id
                ));
            }
        }

        if self.by_id.len() != self.items.len() {
            return Some(format!(
                "Id map has {} entries for {} items",
                self.by_id.len(),
                self.items.len()
            ));
        }

        for id in self.inverted.indexed_ids() {
            if !self.by_id.contains_key(id) {
                return Some(format!("Indexed id '{}' has no item", id));
            }
            if !self.scores.contains(id) {
                return Some(format!("Indexed id '{}' has no relevance score", id));
            }
        }

        if self.scores.len() != self.items.len() {
            return Some(format!(
                "{} relevance scores for {} items",
                self.scores.len(),
                self.items.len()
            ));
        }

        if let Some(item) = self.items.iter().find(|item| !self.scores.contains(&item.id)) {
            return Some(format!("Item '{}' has no relevance score", item.id));
        }

        None
    }

    #[cfg(test)]
    pub(crate) fn inverted_mut(&mut self) -> &mut InvertedIndex {
        &mut self.inverted
    }
}
