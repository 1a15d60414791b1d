// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the rubber meets the road.
//!
//! Everything culminates here. You've built a trie, an inverted index and a
//! score table. Now you actually find things. The cascade (pattern → keyword
//! → correction → substring) answers ordinary keyword queries from a hash
//! probe and still catches typos and partial words.

pub mod boyer_moore;
pub mod pipeline;
pub mod query;

pub use boyer_moore::{contains, count_occurrences, BoyerMoore};
pub use pipeline::{run_pipeline, PipelineContext, PipelineMode};
pub use query::{has_regex_tokens, validate_query};
