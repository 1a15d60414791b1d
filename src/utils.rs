// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing and paging.

/// Normalize a query or name for search: lowercase and trim.
///
/// This is the form queries take before the regex and substring stages, and
/// the form words take before they go into the trie. Inner whitespace is left
/// alone; callers that need tokens split on it themselves.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalize a single token for the inverted index.
///
/// Lowercases and strips every character outside `[a-z0-9]`:
/// - "Organic," → "organic"
/// - "2%" → "2"
/// - "café" → "caf"
///
/// The same function runs at index time and at query time, so a token always
/// finds itself.
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Slice out page `page` of `size` items.
///
/// Returns an empty vec if the start index lies at or beyond the end, or if
/// `size` is zero. Overflowing `page * size` is treated as "beyond the end".
pub fn paginate<T: Clone>(items: &[T], page: usize, size: usize) -> Vec<T> {
    if size == 0 {
        return Vec::new();
    }
    let Some(start) = page.checked_mul(size) else {
        return Vec::new();
    };
    if start >= items.len() {
        return Vec::new();
    }
    let end = start.saturating_add(size).min(items.len());
    items[start..end].to_vec()
}

/// Parse a store-provided price string like `"$4.99"` or `" 12 "`.
///
/// Returns `None` for blank or non-numeric input rather than failing; callers
/// decide whether an unparseable price excludes the item or sorts it last.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.replace('$', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}
