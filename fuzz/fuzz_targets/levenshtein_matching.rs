// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for edit distance.
//!
//! Verifies the bounded computation agrees with the full one and that both
//! respect the metric's basic bounds. Spelling correction trusts these
//! numbers; if they lie, shoppers get the wrong product.

#![no_main]

use arbitrary::Arbitrary;
use catalog_search::fuzzy::{bounded_distance, distance};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for edit distance
#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(50).collect();
    let target: String = input.target.chars().take(100).collect();
    let max = usize::from(input.max % 8);

    let full = distance(&query, &target);
    let bounded = bounded_distance(&query, &target, max);

    // INVARIANT 1: bounded agrees with full inside the bound, None outside
    if full <= max {
        assert_eq!(bounded, Some(full), "query='{}', target='{}'", query, target);
    } else {
        assert_eq!(bounded, None, "query='{}', target='{}'", query, target);
    }

    // INVARIANT 2: length difference <= distance <= longer length
    let (lq, lt) = (query.chars().count(), target.chars().count());
    assert!(full >= lq.abs_diff(lt));
    assert!(full <= lq.max(lt));

    // INVARIANT 3: symmetric, zero exactly on equality
    assert_eq!(full, distance(&target, &query));
    assert_eq!(full == 0, query == target);
});
