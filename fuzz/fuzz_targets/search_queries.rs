// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at both search entry points to verify the
//! pipeline never panics and never returns invalid pages. Half the whitelist
//! is regex syntax, so this is also where malformed patterns get exercised.

#![no_main]

use catalog_search::testing::sample_catalog;
use catalog_search::{CatalogEngine, EngineConfig, MemoryStore, QueryStatus};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

const PAGE_SIZE: usize = 5;

fuzz_target!(|query: &[u8]| {
    // Build the engine once per process
    static ENGINE: std::sync::OnceLock<CatalogEngine<MemoryStore>> = std::sync::OnceLock::new();
    let engine = ENGINE.get_or_init(|| {
        CatalogEngine::new(MemoryStore::new(sample_catalog()), EngineConfig::default())
            .expect("sample catalog loads")
    });

    let query = String::from_utf8_lossy(query);

    // INVARIANT 1: neither entry point panics
    let plain = engine.search(&query, 0, PAGE_SIZE);
    let corrected = engine.search_with_correction(&query, 0, PAGE_SIZE);

    // INVARIANT 2: pages respect the size
    assert!(plain.len() <= PAGE_SIZE, "got {} results", plain.len());
    assert!(corrected.items.len() <= PAGE_SIZE);

    // INVARIANT 3: every result is a catalog item, at most once
    let snapshot = engine.snapshot();
    let mut seen = HashSet::new();
    for item in &corrected.items {
        assert!(snapshot.item(&item.id).is_some(), "unknown id {}", item.id);
        assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
    }

    // INVARIANT 4: status agrees with the page
    match corrected.status {
        QueryStatus::Rejected | QueryStatus::NoMatch => assert!(corrected.items.is_empty()),
        QueryStatus::Matched(_) => {}
    }
    if corrected.status == QueryStatus::Rejected {
        assert!(plain.is_empty());
        assert!(corrected.suggestions.is_empty());
    }

    // INVARIANT 5: suggestions are deduplicated and capped
    assert!(corrected.suggestions.len() <= engine.config().max_corrections);
    let unique: HashSet<&String> = corrected.suggestions.iter().collect();
    assert_eq!(unique.len(), corrected.suggestions.len());

    // INVARIANT 6: autocomplete never panics and respects its limit
    assert!(engine.autocomplete(&query).len() <= engine.config().autocomplete_limit);
});
