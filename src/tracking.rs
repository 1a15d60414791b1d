// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query frequency counter.
//!
//! Every validated search records its query here, lowercased and trimmed.
//! Searches run concurrently, so this is the hot write path: a keyword seen
//! before is bumped with an atomic add under the shared read lock, and only
//! a first sighting takes the write lock to add its counter.
//!
//! Counts survive reloads; the tracker is owned by the engine, not by a
//! snapshot.

use crate::types::KeywordCount;
use crate::utils::normalize;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Keyword → number of times searched.
///
/// Grows by one entry per distinct keyword and is never pruned; only a new
/// tracker resets it.
#[derive(Debug, Default)]
pub struct SearchTracker {
    counts: RwLock<HashMap<String, AtomicU64>>,
}

impl SearchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one search for `keyword`. Blank keywords are ignored.
    pub fn record(&self, keyword: &str) {
        let keyword = normalize(keyword);
        if keyword.is_empty() {
            return;
        }

        if let Some(counter) = self.counts.read().get(&keyword) {
            counter.fetch_add(1, Ordering::Relaxed);
            return;
        }

        self.counts
            .write()
            .entry(keyword)
            .or_default()
            .fetch_add(1, Ordering::Relaxed);
    }

    /// How many times `keyword` was searched, in any case. 0 if never.
    pub fn frequency(&self, keyword: &str) -> u64 {
        self.counts
            .read()
            .get(&normalize(keyword))
            .map_or(0, |counter| counter.load(Ordering::Relaxed))
    }

    /// The `limit` most searched keywords, most frequent first, ties alphabetical.
    pub fn top(&self, limit: usize) -> Vec<KeywordCount> {
        let mut all: Vec<KeywordCount> = self
            .counts
            .read()
            .iter()
            .map(|(keyword, counter)| KeywordCount {
                keyword: keyword.clone(),
                count: counter.load(Ordering::Relaxed),
            })
            .collect();

        all.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.keyword.cmp(&b.keyword)));
        all.truncate(limit);
        all
    }

    /// Number of distinct keywords.
    pub fn len(&self) -> usize {
        self.counts.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.read().is_empty()
    }
}
