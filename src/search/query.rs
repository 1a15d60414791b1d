// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query admission: what the pipeline is willing to run.
//!
//! The whitelist is narrow. Letters, digits, whitespace, `-` and
//! `.` cover ordinary product searches; `| * + ? ( )` are let through so that
//! shoppers can write patterns like `milk|cream` or `choc(olate)?`. Anything
//! else (quotes, angle brackets, semicolons, square brackets) is rejected
//! before it reaches the regex compiler.

use crate::config::EngineConfig;

/// Characters allowed on top of ASCII letters, digits and whitespace.
const ALLOWED_PUNCTUATION: &[char] = &['-', '.', '|', '*', '+', '?', '(', ')'];

/// Characters that make a query worth trying as a pattern.
///
/// Broader than the whitelist: `[ ] { } ^ $ \` can never survive validation,
/// but the check stays symmetric with the regex syntax it guards.
const REGEX_TOKENS: &[char] = &['|', '*', '+', '?', '(', ')', '[', ']', '{', '}', '^', '$', '\\'];

#[inline]
fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || c.is_ascii_whitespace() || ALLOWED_PUNCTUATION.contains(&c)
}

/// Is this query admissible? Checks the trimmed query's length in chars
/// against the configured bounds, then every char against the whitelist.
pub fn validate_query(query: &str, config: &EngineConfig) -> bool {
    let trimmed = query.trim();
    let len = trimmed.chars().count();
    if len < config.min_query_len || len > config.max_query_len {
        return false;
    }
    trimmed.chars().all(is_allowed)
}

/// Does the query contain any regex metacharacter?
pub fn has_regex_tokens(query: &str) -> bool {
    query.contains(REGEX_TOKENS)
}
