//! End-to-end checks against the bundled sample catalog file.

use super::common::{ids, SAMPLE_CATALOG};
use catalog_search::{
    CatalogEngine, CompareRequest, EngineConfig, JsonFileStore, MatchStage, QueryStatus,
    RecommendRequest,
};

fn engine() -> CatalogEngine<JsonFileStore> {
    CatalogEngine::new(JsonFileStore::new(SAMPLE_CATALOG), EngineConfig::default())
        .expect("bundled sample catalog should load")
}

#[test]
fn test_sample_catalog_loads() {
    let engine = engine();
    let stats = engine.snapshot().stats();
    assert_eq!(stats.generation, 1);
    assert_eq!(stats.items, 28);
    assert_eq!(stats.categories, 6);
    assert_eq!(stats.stores, 4);
    assert_eq!(
        engine.snapshot().stores(),
        vec!["FreshCo", "Metro", "No Frills", "Zehrs"]
    );
}

#[test]
fn test_sample_keyword_search() {
    let engine = engine();
    // Salted Butter has the shortest name; none of the three is a scored deal.
    assert_eq!(
        ids(&engine.search("butter", 0, 20)),
        vec!["p009", "p024", "p014"]
    );
}

#[test]
fn test_sample_correction() {
    let engine = engine();
    let result = engine.search_with_correction("chiken", 0, 20);
    assert_eq!(result.corrected_query.as_deref(), Some("chicken"));
    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Correction));
    assert_eq!(ids(&result.items), vec!["p021"]);
}

#[test]
fn test_sample_store_ranking() {
    let engine = engine();
    let ranked: Vec<(String, usize)> = engine
        .rank_stores_by_keyword("organic")
        .into_iter()
        .map(|r| (r.store_name, r.occurrences))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("FreshCo".to_string(), 2),
            ("Metro".to_string(), 1),
            ("Zehrs".to_string(), 1),
        ]
    );
}

#[test]
fn test_sample_compare_in_stock_dairy() {
    let engine = engine();
    let request = CompareRequest {
        category: Some("dairy".to_string()),
        in_stock_only: true,
        price_range: Some((3.0, 5.0)),
        ..CompareRequest::default()
    };
    // Chocolate Milk is out of stock; Cheddar has no price.
    assert_eq!(
        ids(&engine.compare(&request)),
        vec!["p003", "p007", "p001", "p005", "p004"]
    );
}

#[test]
fn test_sample_recommendation() {
    let engine = engine();
    let request = RecommendRequest {
        preferred_store: None,
        product_needs: vec!["bread".to_string()],
        loyalty_member: false,
    };
    let stores = engine.recommend_stores(&request);
    assert_eq!(stores.len(), 4);
    assert_eq!(stores.last().map(String::as_str), Some("No Frills"));
}
