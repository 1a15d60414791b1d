//! Search frequency tracking.

use catalog_search::{KeywordCount, SearchTracker};
use std::thread;

#[test]
fn test_counts_fold_case_and_whitespace() {
    let tracker = SearchTracker::new();
    tracker.record("Milk");
    tracker.record(" milk ");
    tracker.record("MILK");
    tracker.record("");
    tracker.record("   ");

    assert_eq!(tracker.frequency("milk"), 3);
    assert_eq!(tracker.frequency("Milk"), 3);
    assert_eq!(tracker.frequency("bread"), 0);
    assert_eq!(tracker.len(), 1);
}

#[test]
fn test_top_orders_by_count_then_keyword() {
    let tracker = SearchTracker::new();
    for keyword in ["eggs", "bread", "eggs", "apples", "bread", "eggs", "cheese"] {
        tracker.record(keyword);
    }

    assert_eq!(
        tracker.top(3),
        vec![
            KeywordCount { keyword: "eggs".into(), count: 3 },
            KeywordCount { keyword: "bread".into(), count: 2 },
            KeywordCount { keyword: "apples".into(), count: 1 },
        ]
    );
    assert_eq!(tracker.top(100).len(), 4);
    assert!(tracker.top(0).is_empty());
}

#[test]
fn test_concurrent_recording_loses_nothing() {
    let tracker = SearchTracker::new();
    thread::scope(|scope| {
        for t in 0..8 {
            let tracker = &tracker;
            scope.spawn(move || {
                for i in 0..500 {
                    tracker.record("shared");
                    tracker.record(&format!("own-{}-{}", t, i % 5));
                }
            });
        }
    });

    assert_eq!(tracker.frequency("shared"), 4000);
    assert_eq!(tracker.frequency("own-3-0"), 100);
    assert_eq!(tracker.len(), 1 + 8 * 5);
}
