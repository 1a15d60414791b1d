//! Search correctness tests.
//!
//! Each pipeline stage gets at least one query that it, and only it, can
//! answer over the sample catalog.

use super::common::{assert_all_names_contain, assert_no_duplicates, ids, sample_engine};
use catalog_search::{MatchStage, QueryStatus};

// ============================================================================
// INDEX STAGE
// ============================================================================

#[test]
fn test_keyword_finds_every_item_with_the_word() {
    let engine = sample_engine();
    let result = engine.search_with_correction("milk", 0, 20);

    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Index));
    let mut found = ids(&result.items);
    found.sort_unstable();
    assert_eq!(found, vec!["p01", "p03", "p04", "p12"]);
    assert_all_names_contain(&result.items, "milk");
}

#[test]
fn test_keyword_is_case_insensitive() {
    let engine = sample_engine();
    assert_eq!(
        ids(&engine.search("MILK", 0, 20)),
        ids(&engine.search("milk", 0, 20))
    );
    assert_eq!(
        ids(&engine.search("  Milk  ", 0, 20)),
        ids(&engine.search("milk", 0, 20))
    );
}

#[test]
fn test_multi_word_query_unions_tokens() {
    let engine = sample_engine();
    let result = engine.search_with_correction("organic bread", 0, 20);

    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Index));
    let mut found = ids(&result.items);
    found.sort_unstable();
    assert_eq!(found, vec!["p01", "p02", "p05", "p06", "p07", "p09"]);
    assert_no_duplicates(&result.items);
}

#[test]
fn test_unknown_token_does_not_block_known_one() {
    let engine = sample_engine();
    let result = engine.search_with_correction("qqqq bread", 0, 20);
    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Index));
    assert_eq!(result.items.len(), 3);
}

#[test]
fn test_three_letter_word_is_indexed() {
    let engine = sample_engine();
    assert_eq!(ids(&engine.search("oat", 0, 20)), vec!["p04"]);
}

// ============================================================================
// REGEX STAGE
// ============================================================================

#[test]
fn test_alternation_pattern() {
    let engine = sample_engine();
    let result = engine.search_with_correction("milk|bread", 0, 20);

    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Regex));
    let mut found = ids(&result.items);
    found.sort_unstable();
    assert_eq!(found, vec!["p01", "p03", "p04", "p05", "p06", "p07", "p12"]);
}

#[test]
fn test_optional_group_pattern() {
    let engine = sample_engine();
    let result = engine.search_with_correction("choc(olate)? milk", 0, 20);
    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Regex));
    assert_eq!(ids(&result.items), vec!["p12"]);
}

#[test]
fn test_pattern_that_fails_to_compile_falls_through() {
    let engine = sample_engine();
    // Unbalanced group: not a valid pattern, but "milk" is still a token.
    let result = engine.search_with_correction("(milk", 0, 20);
    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Index));
    assert_eq!(result.items.len(), 4);
}

// ============================================================================
// SUBSTRING STAGE
// ============================================================================

#[test]
fn test_partial_word_falls_back_to_substring() {
    let engine = sample_engine();
    let result = engine.search_with_correction("ana", 0, 20);

    assert_eq!(result.status, QueryStatus::Matched(MatchStage::Substring));
    let mut found = ids(&result.items);
    found.sort_unstable();
    assert_eq!(found, vec!["p07", "p08"]);
    assert_all_names_contain(&result.items, "ana");
}

#[test]
fn test_substring_spans_words() {
    let engine = sample_engine();
    let items = engine.search("se blo", 0, 20);
    assert_eq!(ids(&items), vec!["p10"]);
}

// ============================================================================
// NO MATCH
// ============================================================================

#[test]
fn test_nothing_matches() {
    let engine = sample_engine();
    let result = engine.search_with_correction("zzzzzz", 0, 20);
    assert_eq!(result.status, QueryStatus::NoMatch);
    assert!(result.items.is_empty());
    assert!(result.corrected_query.is_none());
    assert!(result.suggestions.is_empty());
}

// ============================================================================
// PAGINATION
// ============================================================================

#[test]
fn test_pages_partition_the_ranked_list() {
    let engine = sample_engine();
    let all = engine.search("milk", 0, 20);
    let first = engine.search("milk", 0, 3);
    let second = engine.search("milk", 1, 3);
    let third = engine.search("milk", 2, 3);

    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 1);
    assert!(third.is_empty());

    let stitched: Vec<_> = first.into_iter().chain(second).collect();
    assert_eq!(stitched, all);
}

#[test]
fn test_zero_page_size_is_empty() {
    let engine = sample_engine();
    assert!(engine.search("milk", 0, 0).is_empty());
}
