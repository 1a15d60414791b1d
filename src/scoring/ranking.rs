// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ordering and the heap-based analytics rankings.
//!
//! Every ordering here is total. Scores tie often (two plain items with
//! equal-length names), so each comparison ends in a deterministic
//! tiebreaker and repeated queries return identical pages.
//!
//! | Ranking          | Primary               | Tiebreaker       |
//! |------------------|-----------------------|------------------|
//! | Search results   | relevance, descending | item id          |
//! | Stores by keyword| occurrences, desc     | store name       |
//! | Top deals        | discount %, desc      | item id          |

use super::core::RelevanceScores;
use crate::search::boyer_moore::BoyerMoore;
use crate::types::{CatalogItem, StoreRank};
use crate::utils::{normalize, parse_price};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for f64 that implements Ord for use in heaps.
///
/// Uses `total_cmp`, so NaN sorts above every number instead of comparing
/// equal to everything.
#[derive(Debug, Clone, Copy)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for OrderedFloat {}

impl PartialOrd for OrderedFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Compare two items for search ranking.
///
/// Sort order:
/// 1. **Relevance** - higher score first
/// 2. **Id** - ascending, for absolute determinism
pub fn compare_by_relevance(a: &CatalogItem, b: &CatalogItem, scores: &RelevanceScores) -> Ordering {
    let a_score = scores.score_or_floor(&a.id);
    let b_score = scores.score_or_floor(&b.id);
    b_score.total_cmp(&a_score).then_with(|| a.id.cmp(&b.id))
}

/// Sort items in place for search ranking.
pub fn sort_by_relevance(items: &mut [CatalogItem], scores: &RelevanceScores) {
    items.sort_by(|a, b| compare_by_relevance(a, b, scores));
}

// =============================================================================
// STORE RANKING
// =============================================================================

/// Rank stores by how often `keyword` appears across their item names.
///
/// Matching is case-insensitive and counts overlapping occurrences. Stores
/// with zero occurrences are left out. Ranks are 1-based; equal counts order
/// by store name.
pub fn rank_stores_by_keyword<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    keyword: &str,
) -> Vec<StoreRank> {
    let matcher = BoyerMoore::new(&normalize(keyword));
    if matcher.is_empty() {
        return Vec::new();
    }

    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for item in items {
        let count = matcher.count_in(&item.name.to_lowercase());
        if count > 0 {
            *occurrences.entry(item.store_name.as_str()).or_default() += count;
        }
    }

    // Max-heap on count; Reverse on the name so ties pop alphabetically.
    let mut heap: BinaryHeap<(usize, Reverse<&str>)> = occurrences
        .into_iter()
        .map(|(store, count)| (count, Reverse(store)))
        .collect();

    let mut ranked = Vec::with_capacity(heap.len());
    while let Some((count, Reverse(store))) = heap.pop() {
        ranked.push(StoreRank {
            rank: ranked.len() + 1,
            store_name: store.to_string(),
            occurrences: count,
        });
    }
    ranked
}

// =============================================================================
// DEALS
// =============================================================================

/// `(price - sale) / price * 100`, or 0 when either price is missing,
/// unparseable, or the base price is zero.
pub fn discount_percent(item: &CatalogItem) -> f64 {
    let Some(price) = parse_price(&item.price) else {
        return 0.0;
    };
    let Some(sale) = item.sale_price.as_deref().and_then(parse_price) else {
        return 0.0;
    };
    if price == 0.0 {
        return 0.0;
    }
    (price - sale) / price * 100.0
}

/// The `limit` deal items with the biggest discount, biggest first.
///
/// Only items with a real deal (present, not `NONE`) qualify. Equal
/// discounts order by id.
pub fn top_deals<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    limit: usize,
) -> Vec<CatalogItem> {
    if limit == 0 {
        return Vec::new();
    }

    let candidates: Vec<&CatalogItem> = items.into_iter().filter(|item| item.has_deal()).collect();
    let mut heap: BinaryHeap<(OrderedFloat, Reverse<&str>, usize)> = candidates
        .iter()
        .enumerate()
        .map(|(i, item)| (OrderedFloat(discount_percent(item)), Reverse(item.id.as_str()), i))
        .collect();

    let mut deals = Vec::with_capacity(limit.min(heap.len()));
    while deals.len() < limit {
        let Some((_, _, i)) = heap.pop() else { break };
        deals.push(candidates[i].clone());
    }
    deals
}
