//! Repeated queries return identical pages.
//!
//! Candidate sets come out of hash sets and (with `parallel`) a rayon
//! scan, so their order before ranking is arbitrary. The ranking must
//! erase that.

use super::common::{engine_with, ids, make_item, sample_engine};

#[test]
fn test_repeated_search_identical() {
    let engine = sample_engine();
    for query in ["milk", "bread", "organic bread", "ana", "milk|bread", "orgnic"] {
        let first = engine.search_with_correction(query, 0, 20);
        for _ in 0..10 {
            let again = engine.search_with_correction(query, 0, 20);
            assert_eq!(ids(&first.items), ids(&again.items), "query {:?}", query);
            assert_eq!(first.status, again.status);
            assert_eq!(first.suggestions, again.suggestions);
        }
    }
}

#[test]
fn test_insertion_order_does_not_matter() {
    let forward: Vec<_> = (0..30)
        .map(|i| make_item(&format!("id{:02}", i), "Rye Bread"))
        .collect();
    let mut backward = forward.clone();
    backward.reverse();

    let a = engine_with(forward);
    let b = engine_with(backward);
    assert_eq!(ids(&a.search("bread", 0, 30)), ids(&b.search("bread", 0, 30)));
    assert_eq!(ids(&a.search("bread", 1, 7)), ids(&b.search("bread", 1, 7)));
}

#[test]
fn test_rankings_deterministic() {
    let engine = sample_engine();
    let deals = ids(&engine.top_deals(10)).join(",");
    let stores = engine.rank_stores_by_keyword("a");
    for _ in 0..10 {
        assert_eq!(ids(&engine.top_deals(10)).join(","), deals);
        assert_eq!(engine.rank_stores_by_keyword("a"), stores);
    }
}
