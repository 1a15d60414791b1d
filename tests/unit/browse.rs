//! Price comparison and store recommendation.

use super::common::{ids, make_priced_item, sample_catalog};
use catalog_search::browse::{compare_items, recommend_stores};
use catalog_search::{CompareRequest, DealType, RecommendRequest};

#[test]
fn test_compare_by_effective_price() {
    let catalog = sample_catalog();
    let request = CompareRequest {
        category: Some("Dairy".to_string()),
        ..CompareRequest::default()
    };
    assert_eq!(
        ids(&compare_items(&catalog, &request)),
        vec!["p12", "p03", "p11", "p01", "p04", "p02", "p10"]
    );
}

#[test]
fn test_compare_price_range_excludes_unpriced() {
    let catalog = sample_catalog();
    let request = CompareRequest {
        category: Some("dairy".to_string()),
        price_range: Some((3.0, 4.5)),
        ..CompareRequest::default()
    };
    assert_eq!(ids(&compare_items(&catalog, &request)), vec!["p03", "p11", "p01"]);
}

#[test]
fn test_compare_sale_only() {
    let catalog = sample_catalog();
    let request = CompareRequest {
        sale_only: true,
        ..CompareRequest::default()
    };
    assert_eq!(
        ids(&compare_items(&catalog, &request)),
        vec!["p08", "p06", "p03", "p01"]
    );
}

#[test]
fn test_compare_stores_and_stock() {
    let catalog = sample_catalog();
    let metro = CompareRequest {
        stores: vec!["Metro".to_string()],
        ..CompareRequest::default()
    };
    assert_eq!(
        ids(&compare_items(&catalog, &metro)),
        vec!["p08", "p05", "p03", "p10"]
    );

    let produce_in_stock = CompareRequest {
        category: Some("Produce".to_string()),
        in_stock_only: true,
        ..CompareRequest::default()
    };
    assert_eq!(ids(&compare_items(&catalog, &produce_in_stock)), vec!["p08"]);
}

#[test]
fn test_compare_equal_prices_by_id() {
    let items = vec![
        make_priced_item("b", "Jam", "S", "$3.00", None, None),
        make_priced_item("a", "Jam", "S", "3", None, None),
    ];
    assert_eq!(ids(&compare_items(&items, &CompareRequest::default())), vec!["a", "b"]);
}

#[test]
fn test_recommend_full_profile() {
    let request = RecommendRequest {
        preferred_store: Some("zehrs".to_string()),
        product_needs: vec!["milk".to_string()],
        loyalty_member: true,
    };
    assert_eq!(
        recommend_stores(&sample_catalog(), &request),
        vec!["Zehrs", "FreshCo", "Metro"]
    );
}

#[test]
fn test_recommend_needs_only() {
    let request = RecommendRequest {
        product_needs: vec!["  MILK ".to_string()],
        ..RecommendRequest::default()
    };
    assert_eq!(
        recommend_stores(&sample_catalog(), &request),
        vec!["Zehrs", "Metro", "FreshCo"]
    );
}

#[test]
fn test_recommend_blank_needs_rank_by_price() {
    let request = RecommendRequest {
        product_needs: vec!["".to_string(), "   ".to_string()],
        ..RecommendRequest::default()
    };
    // Nothing matches, so cheaper baskets win.
    assert_eq!(
        recommend_stores(&sample_catalog(), &request),
        vec!["Metro", "Zehrs", "FreshCo"]
    );
}

#[test]
fn test_recommend_loyalty_only_counts_loyalty_deals() {
    let items = vec![
        make_priced_item("1", "Tea", "A", "$1.00", None, Some(DealType::Sale)),
        make_priced_item("2", "Tea", "B", "$1.00", None, Some(DealType::Loyalty)),
    ];
    let request = RecommendRequest {
        loyalty_member: true,
        ..RecommendRequest::default()
    };
    assert_eq!(recommend_stores(&items, &request), vec!["B", "A"]);
}
