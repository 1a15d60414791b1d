//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catalog_search::{CatalogEngine, CatalogItem, EngineConfig, MemoryStore};
use std::collections::HashSet;

// Re-export canonical test utilities from catalog_search::testing
pub use catalog_search::testing::{make_deal_item, make_item, make_priced_item, sample_catalog};

/// Path to the bundled sample catalog.
pub const SAMPLE_CATALOG: &str = "data/sample_catalog.json";

// ============================================================================
// ENGINE CONSTRUCTION
// ============================================================================

/// Engine over the in-code sample catalog with default config.
pub fn sample_engine() -> CatalogEngine<MemoryStore> {
    engine_with(sample_catalog())
}

/// Engine over an arbitrary item list with default config.
pub fn engine_with(items: Vec<CatalogItem>) -> CatalogEngine<MemoryStore> {
    CatalogEngine::new(MemoryStore::new(items), EngineConfig::default())
        .expect("engine over test items should load")
}

/// `count` plain items named "Item 000", "Item 001", ... with ids "000", "001", ...
pub fn numbered_items(count: usize) -> Vec<CatalogItem> {
    (0..count)
        .map(|i| make_item(&format!("{:03}", i), &format!("Item {:03}", i)))
        .collect()
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids(items: &[CatalogItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

/// Assert a result page has no repeated ids.
pub fn assert_no_duplicates(items: &[CatalogItem]) {
    let mut seen = HashSet::new();
    for item in items {
        assert!(seen.insert(&item.id), "duplicate id {} in results", item.id);
    }
}

/// Assert every result's name contains `needle`, case-insensitively.
pub fn assert_all_names_contain(items: &[CatalogItem], needle: &str) {
    let needle = needle.to_lowercase();
    for item in items {
        assert!(
            item.name.to_lowercase().contains(&needle),
            "'{}' does not contain '{}'",
            item.name,
            needle
        );
    }
}
