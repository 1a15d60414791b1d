// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how results get their order.
//!
//! The key insight is that deal status dominates everything else. A loyalty
//! item with a long name beats a plain item with a short one. Name length only
//! separates items within the same deal class.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{
    compare_by_relevance, discount_percent, rank_stores_by_keyword, sort_by_relevance, top_deals,
    OrderedFloat,
};
