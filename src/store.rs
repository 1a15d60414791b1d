// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the catalog comes from.
//!
//! The engine only ever asks a store for the full item list, on reload.
//! Everything else it needs is derived from that list.

use crate::error::{CatalogError, Result};
use crate::types::CatalogItem;
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};

/// The persistent catalog, as the engine sees it.
pub trait CatalogStore: Send + Sync {
    /// Every item currently in the catalog.
    fn list_all_items(&self) -> Result<Vec<CatalogItem>>;

    /// Insert an item, or replace the one with the same id.
    ///
    /// The engine doesn't see the change until the next reload.
    fn save_item(&self, item: CatalogItem) -> Result<()>;
}

impl<S: CatalogStore + ?Sized> CatalogStore for std::sync::Arc<S> {
    fn list_all_items(&self) -> Result<Vec<CatalogItem>> {
        (**self).list_all_items()
    }

    fn save_item(&self, item: CatalogItem) -> Result<()> {
        (**self).save_item(item)
    }
}

fn upsert(items: &mut Vec<CatalogItem>, item: CatalogItem) {
    match items.iter_mut().find(|existing| existing.id == item.id) {
        Some(existing) => *existing = item,
        None => items.push(item),
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// A catalog held in memory. For tests and for embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<Vec<CatalogItem>>,
}

impl MemoryStore {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Swap the whole catalog, as a bulk import would.
    pub fn replace_all(&self, items: Vec<CatalogItem>) {
        *self.items.write() = items;
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl CatalogStore for MemoryStore {
    fn list_all_items(&self) -> Result<Vec<CatalogItem>> {
        Ok(self.items.read().clone())
    }

    fn save_item(&self, item: CatalogItem) -> Result<()> {
        upsert(&mut self.items.write(), item);
        Ok(())
    }
}

// =============================================================================
// JSON FILE
// =============================================================================

/// A catalog stored as a JSON array of items in one file.
///
/// The file is read fresh on every `list_all_items`, so edits on disk show
/// up at the next reload. A missing file is an error, not an empty catalog.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<CatalogItem>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| CatalogError::io(&self.path, e))?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, items: &[CatalogItem]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json).map_err(|e| CatalogError::io(&self.path, e))
    }
}

impl CatalogStore for JsonFileStore {
    fn list_all_items(&self) -> Result<Vec<CatalogItem>> {
        self.read()
    }

    fn save_item(&self, item: CatalogItem) -> Result<()> {
        let mut items = match self.read() {
            Ok(items) => items,
            Err(CatalogError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        upsert(&mut items, item);
        self.write(&items)
    }
}
