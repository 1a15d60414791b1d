// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{CatalogItem, DealType};

/// Create a simple test item with default fields.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, name: &str) -> CatalogItem {
    CatalogItem::new(id, name, "Grocery", "Test Store", "$1.00")
}

/// Create a test item carrying a deal classification.
pub fn make_deal_item(id: &str, name: &str, deal: DealType) -> CatalogItem {
    let mut item = make_item(id, name);
    item.deal_type = Some(deal);
    item
}

/// Create a fully priced test item.
pub fn make_priced_item(
    id: &str,
    name: &str,
    store: &str,
    price: &str,
    sale_price: Option<&str>,
    deal: Option<DealType>,
) -> CatalogItem {
    let mut item = CatalogItem::new(id, name, "Grocery", store, price);
    item.sale_price = sale_price.map(str::to_string);
    item.deal_type = deal;
    item
}

/// A small mixed catalog: three stores, three categories, every deal type,
/// one unparseable price.
pub fn sample_catalog() -> Vec<CatalogItem> {
    let item = |id: &str, name: &str, category: &str, store: &str, price: &str| {
        let mut item = CatalogItem::new(id, name, category, store, price);
        item.availability = Some("In-stock".to_string());
        item
    };

    let mut items = vec![
        item("p01", "Organic Whole Milk", "Dairy", "FreshCo", "$5.49"),
        item("p02", "Organic Free Range Eggs", "Dairy", "FreshCo", "$6.99"),
        item("p03", "Skim Milk", "Dairy", "Metro", "$3.99"),
        item("p04", "Oat Milk Barista Edition", "Dairy", "Zehrs", "$4.79"),
        item("p05", "Whole Wheat Bread", "Bakery", "Metro", "$2.99"),
        item("p06", "Sourdough Bread", "Bakery", "Zehrs", "$4.49"),
        item("p07", "Banana Bread", "Bakery", "FreshCo", "$5.99"),
        item("p08", "Bananas", "Produce", "Metro", "$0.69"),
        item("p09", "Organic Baby Spinach", "Produce", "Zehrs", "$3.49"),
        item("p10", "Cheddar Cheese Block", "Dairy", "Metro", "price on request"),
        item("p11", "Greek Yogurt Plain", "Dairy", "FreshCo", "$4.29"),
        item("p12", "Chocolate Milk", "Dairy", "Zehrs", "$2.49"),
    ];

    let deal = |items: &mut Vec<CatalogItem>, id: &str, sale: &str, deal: DealType| {
        if let Some(item) = items.iter_mut().find(|i| i.id == id) {
            item.sale_price = Some(sale.to_string());
            item.deal_type = Some(deal);
        }
    };
    deal(&mut items, "p01", "4.39", DealType::Loyalty);
    deal(&mut items, "p03", "3.59", DealType::Sale);
    deal(&mut items, "p06", "3.49", DealType::Promo);
    deal(&mut items, "p08", "0.49", DealType::Clearance);
    deal(&mut items, "p11", "4.29", DealType::None);

    if let Some(spinach) = items.iter_mut().find(|i| i.id == "p09") {
        spinach.availability = Some("Out-of-stock".to_string());
    }

    items
}
