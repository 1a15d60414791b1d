//! Pipeline-level properties: pagination, ranking order, result validity.

use super::common::{engine_with, make_item};
use crate::name_strategy;
use crate::oracles::oracle_page;
use catalog_search::scoring::{relevance_score, MIN_SCORE};
use catalog_search::utils::paginate;
use catalog_search::{CatalogItem, DealType, QueryStatus};
use proptest::prelude::*;

fn item_strategy() -> impl Strategy<Value = (String, Option<DealType>)> {
    let deal = prop_oneof![
        Just(None),
        Just(Some(DealType::Loyalty)),
        Just(Some(DealType::Sale)),
        Just(Some(DealType::Promo)),
        Just(Some(DealType::Clearance)),
        Just(Some(DealType::None)),
    ];
    (name_strategy(), deal)
}

fn catalog_strategy() -> impl Strategy<Value = Vec<CatalogItem>> {
    prop::collection::vec(item_strategy(), 0..25).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (name, deal))| {
                let mut item = make_item(&format!("i{:02}", i), &name);
                item.deal_type = deal;
                item
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: paginate is the obvious skip/take slice.
    #[test]
    fn prop_paginate_matches_oracle(
        items in prop::collection::vec(any::<u8>(), 0..60),
        page in 0usize..10,
        size in 0usize..15,
    ) {
        prop_assert_eq!(paginate(&items, page, size), oracle_page(&items, page, size));
    }

    /// Property: scores are never below the floor.
    #[test]
    fn prop_score_floor((name, deal) in item_strategy()) {
        let mut item = make_item("x", &name);
        item.deal_type = deal;
        prop_assert!(relevance_score(&item) >= MIN_SCORE);
    }

    /// Property: every result matches the query somewhere, pages are
    /// disjoint, and results come in non-increasing score order.
    #[test]
    fn prop_results_valid_and_ranked(catalog in catalog_strategy(), query in "[a-z]{2,4}") {
        let engine = engine_with(catalog);
        let snapshot = engine.snapshot();
        let result = engine.search_with_correction(&query, 0, 100);

        match result.status {
            QueryStatus::Rejected => prop_assert!(false, "valid query {:?} rejected", query),
            QueryStatus::NoMatch => prop_assert!(result.items.is_empty()),
            QueryStatus::Matched(_) => prop_assert!(!result.items.is_empty()),
        }

        for pair in result.items.windows(2) {
            let a = snapshot.scores().score_or_floor(&pair[0].id);
            let b = snapshot.scores().score_or_floor(&pair[1].id);
            prop_assert!(a > b || (a == b && pair[0].id < pair[1].id));
        }
        for item in &result.items {
            prop_assert!(snapshot.item(&item.id).is_some());
        }

        let first = engine.search(&query, 0, 3);
        let second = engine.search(&query, 1, 3);
        for item in &second {
            prop_assert!(first.iter().all(|f| f.id != item.id));
        }
    }
}
