// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! Two layers here: bounded Levenshtein for one-off comparisons, and a spell
//! corrector that runs it against the inverted index vocabulary.

mod levenshtein;
mod spell;

pub use levenshtein::*;
pub use spell::suggest_corrections;
