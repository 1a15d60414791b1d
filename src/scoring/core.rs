// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind relevance ranking.
//!
//! Deal status dominates. A loyalty deal with a 400-character name still
//! outranks a plain item with a one-word name, because the bonus gaps (10
//! and 5) are far larger than anything the length penalty takes away from a
//! realistic product name. Within a deal class, shorter, more generic names
//! win slightly.
//!
//! ```text
//! score = max(0.1, 1.0 + deal_bonus - chars(name) / 50.0)
//! ```
//!
//! # Constants
//!
//! | Deal            | Bonus | Why this value |
//! |-----------------|-------|----------------|
//! | LOYALTY         | 10.0  | Members see their prices first |
//! | SALE / PROMO    | 5.0   | Above plain items, below loyalty |
//! | anything else   | 0.0   | Includes CLEARANCE, NONE, and absent |
//!
//! The floor keeps every score positive, so a very long plain name can't
//! sink below zero and invert the ordering against a missing score.

use crate::types::{CatalogItem, DealType};
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Everyone starts here.
pub const BASE_SCORE: f64 = 1.0;

pub const LOYALTY_BONUS: f64 = 10.0;

/// Shared by SALE and PROMO.
pub const SALE_BONUS: f64 = 5.0;

/// Name length (in chars) that costs one point.
pub const NAME_LENGTH_DIVISOR: f64 = 50.0;

/// No score ever goes below this.
pub const MIN_SCORE: f64 = 0.1;

/// Bonus for a deal classification.
pub fn deal_bonus(deal: Option<&DealType>) -> f64 {
    match deal {
        Some(DealType::Loyalty) => LOYALTY_BONUS,
        Some(DealType::Sale | DealType::Promo) => SALE_BONUS,
        _ => 0.0,
    }
}

/// Static relevance of one item.
pub fn relevance_score(item: &CatalogItem) -> f64 {
    let length_penalty = item.name.chars().count() as f64 / NAME_LENGTH_DIVISOR;
    (BASE_SCORE + deal_bonus(item.deal_type.as_ref()) - length_penalty).max(MIN_SCORE)
}

/// Item id → relevance score, computed for a whole catalog at once.
#[derive(Debug, Clone, Default)]
pub struct RelevanceScores {
    scores: HashMap<String, f64>,
}

impl RelevanceScores {
    pub fn build(items: &[CatalogItem]) -> Self {
        #[cfg(feature = "parallel")]
        let scores = items
            .par_iter()
            .map(|item| (item.id.clone(), relevance_score(item)))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let scores = items
            .iter()
            .map(|item| (item.id.clone(), relevance_score(item)))
            .collect();

        Self { scores }
    }

    #[inline]
    pub fn get(&self, id: &str) -> Option<f64> {
        self.scores.get(id).copied()
    }

    /// Score for ranking. Ids without a score rank at the floor.
    #[inline]
    pub fn score_or_floor(&self, id: &str) -> f64 {
        self.get(id).unwrap_or(MIN_SCORE)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scores.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
