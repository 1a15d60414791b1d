//! Inverted index, prefix trie and snapshot construction.

use super::common::{make_item, sample_catalog};
use catalog_search::index::tokenize_name;
use catalog_search::{CatalogError, EngineConfig, InvertedIndex, PrefixTrie, Snapshot};
use std::collections::HashSet;

// ============================================================================
// INVERTED INDEX
// ============================================================================

#[test]
fn test_tokenize_drops_short_words_and_punctuation() {
    assert_eq!(
        tokenize_name("Milk, 2% Fat (1L) Jug", 3),
        vec!["milk", "fat", "1l", "jug"]
    );
    assert!(tokenize_name("a b c", 3).is_empty());
    assert!(tokenize_name("!!! ???", 3).is_empty());
}

#[test]
fn test_lookup_normalizes_query_token() {
    let items = vec![make_item("1", "Organic Milk"), make_item("2", "Whole Milk")];
    let index = InvertedIndex::build(&items, 3);

    let expected: HashSet<String> = ["1", "2"].iter().map(|s| s.to_string()).collect();
    assert_eq!(index.lookup("MILK!"), expected);
    assert!(index.lookup("cream").is_empty());
    assert!(index.contains_token("organic"));
    assert_eq!(index.len(), 3);
}

#[test]
fn test_vocabulary_is_every_token() {
    let index = InvertedIndex::build(&sample_catalog(), 3);
    let vocabulary: HashSet<&str> = index.vocabulary().collect();
    for word in ["organic", "milk", "sourdough", "cheddar", "yogurt"] {
        assert!(vocabulary.contains(word), "missing {}", word);
    }
    assert_eq!(vocabulary.len(), index.len());
}

// ============================================================================
// PREFIX TRIE
// ============================================================================

#[test]
fn test_trie_basics() {
    let trie = PrefixTrie::new();
    assert!(trie.is_empty());

    trie.insert("Milk");
    trie.insert("milk ");
    trie.insert("milkshake");
    trie.insert("   ");

    assert_eq!(trie.len(), 2);
    assert_eq!(trie.frequency("MILK"), 2);
    assert!(trie.contains_exact("milkshake"));
    assert!(!trie.contains_exact("mil"));
    assert_eq!(trie.frequency("mil"), 0);
    assert_eq!(trie.suggest("mi", 10), vec!["milk", "milkshake"]);
    assert!(trie.suggest("mi", 0).is_empty());

    trie.clear();
    assert!(trie.is_empty());
    assert!(trie.suggest("mi", 10).is_empty());
}

// ============================================================================
// SNAPSHOT
// ============================================================================

#[test]
fn test_snapshot_stats_and_groups() {
    let snapshot = Snapshot::build(sample_catalog(), &EngineConfig::default(), 7).unwrap();
    assert_eq!(snapshot.validate(), None);

    let stats = snapshot.stats();
    assert_eq!(stats.generation, 7);
    assert_eq!(stats.items, 12);
    assert_eq!(stats.categories, 3);
    assert_eq!(stats.stores, 3);
    assert_eq!(stats.vocabulary, snapshot.inverted().len());
    assert_eq!(stats.trie_terms, snapshot.trie().len());

    assert_eq!(snapshot.stores(), vec!["FreshCo", "Metro", "Zehrs"]);
    let dairy: Vec<String> = snapshot
        .category_page("Dairy", 0, 3)
        .into_iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(dairy, vec!["p01", "p02", "p03"]);
    assert!(snapshot.store_page("Nowhere", 0, 10).is_empty());
}

#[test]
fn test_snapshot_sorts_by_id() {
    let items = vec![make_item("c", "Cherries"), make_item("a", "Apples"), make_item("b", "Beets")];
    let snapshot = Snapshot::build(items, &EngineConfig::default(), 1).unwrap();
    let order: Vec<&str> = snapshot.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}

#[test]
fn test_snapshot_rejects_duplicate_ids() {
    let items = vec![make_item("a", "Apples"), make_item("a", "Apricots")];
    let err = Snapshot::build(items, &EngineConfig::default(), 1).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "a"));
}

#[test]
fn test_trie_seeded_with_names_and_words() {
    let snapshot = Snapshot::build(sample_catalog(), &EngineConfig::default(), 1).unwrap();
    let trie = snapshot.trie();
    assert!(trie.contains_exact("organic whole milk"));
    assert!(trie.contains_exact("whole"));
    // Every milk-named item contributes the word once.
    assert_eq!(trie.frequency("milk"), 4);
    // Two-letter words are too short to seed.
    assert!(!Snapshot::build(vec![make_item("1", "Ox Tail")], &EngineConfig::default(), 1)
        .unwrap()
        .trie()
        .contains_exact("ox"));
}
