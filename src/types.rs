// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog engine.
//!
//! Items come in from the store, get indexed into a snapshot, and flow back
//! out of queries wrapped in one of the result types below. The engine never
//! mutates an item; it only holds read-only copies keyed by identifier.
//!
//! # Invariants
//!
//! - **CatalogItem**: `id` is unique across a snapshot. Two items with the
//!   same id make snapshot construction fail rather than silently shadow.
//!
//! - **Prices**: kept as the strings the store provides. Parse with
//!   [`CatalogItem::effective_price`] or [`parse_price`]; never assume they
//!   are numeric.

use crate::utils::parse_price;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CATALOG ITEMS
// =============================================================================

/// Promotional classification attached to an item.
///
/// Parsing is case-insensitive. Anything unrecognized is kept verbatim in
/// `Other` so it round-trips through the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DealType {
    Loyalty,
    Sale,
    Promo,
    Clearance,
    None,
    Other(String),
}

impl DealType {
    /// Is this an actual deal (anything except `NONE`)?
    pub fn is_deal(&self) -> bool {
        !matches!(self, DealType::None)
    }

    pub fn as_str(&self) -> &str {
        match self {
            DealType::Loyalty => "LOYALTY",
            DealType::Sale => "SALE",
            DealType::Promo => "PROMO",
            DealType::Clearance => "CLEARANCE",
            DealType::None => "NONE",
            DealType::Other(raw) => raw,
        }
    }
}

impl From<&str> for DealType {
    fn from(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "LOYALTY" => DealType::Loyalty,
            "SALE" => DealType::Sale,
            "PROMO" => DealType::Promo,
            "CLEARANCE" => DealType::Clearance,
            "NONE" => DealType::None,
            _ => DealType::Other(raw.to_string()),
        }
    }
}

impl From<String> for DealType {
    fn from(raw: String) -> Self {
        DealType::from(raw.as_str())
    }
}

impl From<DealType> for String {
    fn from(deal: DealType) -> Self {
        deal.as_str().to_string()
    }
}

impl fmt::Display for DealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One product in the catalog, as the external store describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    #[serde(alias = "productName")]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub store_name: String,
    /// Base price as provided, e.g. `"$4.99"`.
    #[serde(default)]
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loyalty_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_type: Option<DealType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
}

impl CatalogItem {
    /// Minimal item with just the fields the search pipeline reads.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        store_name: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            store_name: store_name.into(),
            price: price.into(),
            sale_price: None,
            loyalty_price: None,
            deal_type: None,
            availability: None,
            description: None,
            image_url: None,
            product_url: None,
        }
    }

    /// Parsed base price, if it is a number.
    pub fn base_price(&self) -> Option<f64> {
        parse_price(&self.price)
    }

    /// Price the shopper actually pays: a non-blank sale price, else the base price.
    ///
    /// A non-blank but unparseable sale price does not fall back to the base
    /// price - the item is treated as unpriced.
    pub fn effective_price(&self) -> Option<f64> {
        match self.sale_price.as_deref() {
            Some(sale) if !sale.trim().is_empty() => parse_price(sale),
            _ => parse_price(&self.price),
        }
    }

    /// Does this item carry a real deal (present and not `NONE`)?
    pub fn has_deal(&self) -> bool {
        self.deal_type.as_ref().is_some_and(DealType::is_deal)
    }
}

// =============================================================================
// QUERY RESULTS
// =============================================================================

/// Which pipeline stage produced the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    /// The query compiled as a pattern and matched item names.
    Regex,
    /// At least one query token hit the inverted index.
    Index,
    /// The query was auto-corrected and the corrected query matched.
    Correction,
    /// Literal substring scan over item names.
    Substring,
}

/// How a query ended up.
///
/// Distinguishes "we refused to run this" from "we ran it and found nothing",
/// which an empty item list alone cannot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "stage")]
pub enum QueryStatus {
    /// Empty, too short, too long, or outside the character whitelist.
    Rejected,
    /// Valid query, no stage produced candidates.
    NoMatch,
    /// Candidates came from this stage.
    Matched(MatchStage),
}

/// Result of a search with correction reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectedSearch {
    /// The requested page of ranked items.
    pub items: Vec<CatalogItem>,
    pub original_query: String,
    /// The query that actually ran, when auto-correction kicked in.
    pub corrected_query: Option<String>,
    /// Every correction considered, deduplicated, at most five.
    pub suggestions: Vec<String>,
    pub status: QueryStatus,
}

impl CorrectedSearch {
    pub(crate) fn rejected(query: &str) -> Self {
        Self {
            items: Vec::new(),
            original_query: query.to_string(),
            corrected_query: None,
            suggestions: Vec::new(),
            status: QueryStatus::Rejected,
        }
    }
}

/// One row of a store ranking by keyword occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRank {
    /// 1-based position.
    pub rank: usize,
    pub store_name: String,
    pub occurrences: usize,
}

/// A tracked query and how many times it was searched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

// =============================================================================
// ANALYTICS REQUESTS
// =============================================================================

/// Filters for a side-by-side price comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompareRequest {
    /// Case-insensitive category match; `None` means any category.
    pub category: Option<String>,
    /// Inclusive `(min, max)` bounds on the effective price.
    pub price_range: Option<(f64, f64)>,
    /// Exact store names; empty means every store.
    pub stores: Vec<String>,
    /// Keep only items whose availability reads "In-stock".
    pub in_stock_only: bool,
    /// Keep only items with a real deal.
    pub sale_only: bool,
}

/// Shopper profile for store recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendRequest {
    pub preferred_store: Option<String>,
    pub product_needs: Vec<String>,
    pub loyalty_member: bool,
}
