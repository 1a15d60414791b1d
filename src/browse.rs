// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shopper-facing analytics over a snapshot: price comparison and store
//! recommendation.
//!
//! Prices here are store-provided strings. An item whose price doesn't parse
//! is dropped by a price filter and sorted after every priced item; it never
//! aborts the whole request.

use crate::types::{CatalogItem, CompareRequest, DealType, RecommendRequest};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Availability value meaning "can be bought now", compared case-insensitively.
pub const IN_STOCK: &str = "In-stock";

/// Score weights for [`recommend_stores`].
pub const NEED_MATCH_POINTS: f64 = 5.0;
pub const PREFERRED_STORE_POINTS: f64 = 3.0;
pub const LOYALTY_MATCH_POINTS: f64 = 2.0;
/// Each dollar of effective price costs this many points.
pub const PRICE_PENALTY_DIVISOR: f64 = 10.0;

fn is_in_stock(item: &CatalogItem) -> bool {
    item.availability
        .as_deref()
        .is_some_and(|a| a.eq_ignore_ascii_case(IN_STOCK))
}

fn matches_request(item: &CatalogItem, req: &CompareRequest) -> bool {
    if let Some(category) = &req.category {
        if !item.category.eq_ignore_ascii_case(category) {
            return false;
        }
    }
    if req.in_stock_only && !is_in_stock(item) {
        return false;
    }
    if !req.stores.is_empty() && !req.stores.iter().any(|s| *s == item.store_name) {
        return false;
    }
    if req.sale_only && !item.has_deal() {
        return false;
    }
    if let Some((min, max)) = req.price_range {
        match item.effective_price() {
            Some(price) if price >= min && price <= max => {}
            _ => return false,
        }
    }
    true
}

/// Cheapest first; unpriced last; id breaks ties.
fn compare_by_price(a: &CatalogItem, b: &CatalogItem) -> Ordering {
    let by_price = match (a.effective_price(), b.effective_price()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_price.then_with(|| a.id.cmp(&b.id))
}

/// Items passing every filter in `req`, cheapest effective price first.
pub fn compare_items<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    req: &CompareRequest,
) -> Vec<CatalogItem> {
    let mut matched: Vec<&CatalogItem> = items
        .into_iter()
        .filter(|item| matches_request(item, req))
        .collect();
    matched.sort_by(|a, b| compare_by_price(a, b));
    matched.into_iter().cloned().collect()
}

/// One item's contribution to its store's recommendation score.
///
/// Needs are trimmed before matching; a blank need matches no name.
pub fn recommendation_points(item: &CatalogItem, req: &RecommendRequest) -> f64 {
    let name = item.name.to_lowercase();
    let mut points = 0.0;

    if req
        .product_needs
        .iter()
        .map(|need| need.trim().to_lowercase())
        .any(|need| !need.is_empty() && name.contains(&need))
    {
        points += NEED_MATCH_POINTS;
    }

    if req
        .preferred_store
        .as_deref()
        .is_some_and(|store| item.store_name.eq_ignore_ascii_case(store))
    {
        points += PREFERRED_STORE_POINTS;
    }

    if req.loyalty_member && item.deal_type == Some(DealType::Loyalty) {
        points += LOYALTY_MATCH_POINTS;
    }

    points - item.effective_price().unwrap_or(0.0) / PRICE_PENALTY_DIVISOR
}

/// Stores ranked by the summed points of their items, best first.
///
/// Equal totals order by store name.
pub fn recommend_stores<'a>(
    items: impl IntoIterator<Item = &'a CatalogItem>,
    req: &RecommendRequest,
) -> Vec<String> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for item in items {
        *totals.entry(item.store_name.as_str()).or_default() += recommendation_points(item, req);
    }

    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.into_iter().map(|(store, _)| store.to_string()).collect()
}
