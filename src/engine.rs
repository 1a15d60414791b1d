// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: owns the published snapshot and serves every query from it.
//!
//! # Lifecycle
//!
//! ```text
//! new() ──▶ reload() ──▶ publish snapshot g1 ──▶ queries ... reload() ──▶ publish g2 ──▶ ...
//!                                                      │
//!                                                      └─ reload fails ──▶ keep g1, warn
//! ```
//!
//! A reload fetches the full item list from the store, builds a complete new
//! [`Snapshot`] off to the side, validates it, and only then swaps it in with
//! a single pointer write. Queries clone the current `Arc` under a read lock
//! held for one instruction, so they never wait on a rebuild and never see a
//! half-built one. Reloads are serialized with each other.
//!
//! The search counter lives here rather than in a snapshot, so tracked
//! counts carry across reloads.

use crate::browse;
use crate::config::EngineConfig;
use crate::error::{CatalogError, Result};
use crate::fuzzy::suggest_corrections;
use crate::scoring;
use crate::search::{run_pipeline, PipelineContext, PipelineMode};
use crate::snapshot::{Snapshot, SnapshotStats};
use crate::store::CatalogStore;
use crate::tracking::SearchTracker;
use crate::types::{CatalogItem, CompareRequest, CorrectedSearch, KeywordCount, RecommendRequest, StoreRank};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// In-memory catalog search over an external store.
pub struct CatalogEngine<S: CatalogStore> {
    store: S,
    config: EngineConfig,
    snapshot: RwLock<Arc<Snapshot>>,
    reload_lock: Mutex<()>,
    tracker: SearchTracker,
}

impl<S: CatalogStore> CatalogEngine<S> {
    /// Create an engine and load the catalog once.
    ///
    /// Fails if the config is invalid or the first load fails; there is no
    /// earlier snapshot to fall back on.
    pub fn new(store: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let engine = Self {
            store,
            config,
            snapshot: RwLock::new(Arc::new(Snapshot::empty())),
            reload_lock: Mutex::new(()),
            tracker: SearchTracker::new(),
        };
        engine.reload()?;
        Ok(engine)
    }

    /// Rebuild every structure from the store and publish the result.
    ///
    /// On failure the previous snapshot stays published and the error is
    /// returned. Safe to call while queries are running.
    pub fn reload(&self) -> Result<SnapshotStats> {
        let _exclusive = self.reload_lock.lock();
        let started = Instant::now();
        let generation = self.snapshot.read().generation() + 1;

        let built = self
            .store
            .list_all_items()
            .and_then(|items| Snapshot::build(items, &self.config, generation))
            .and_then(|snapshot| match snapshot.validate() {
                Some(problem) => Err(CatalogError::Inconsistent(problem)),
                None => Ok(snapshot),
            });

        let snapshot = match built {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(error = %err, "catalog reload failed, keeping previous snapshot");
                return Err(err);
            }
        };

        let stats = snapshot.stats();
        *self.snapshot.write() = Arc::new(snapshot);

        info!(
            generation = stats.generation,
            items = stats.items,
            vocabulary = stats.vocabulary,
            trie_terms = stats.trie_terms,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "catalog reloaded"
        );
        Ok(stats)
    }

    /// The currently published snapshot.
    ///
    /// Holding it pins that generation; a concurrent reload publishes a new
    /// one without affecting this handle.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn run(&self, query: &str, page: usize, size: usize, mode: PipelineMode) -> CorrectedSearch {
        let snapshot = self.snapshot();
        let ctx = PipelineContext {
            snapshot: &snapshot,
            tracker: &self.tracker,
            config: &self.config,
        };
        run_pipeline(ctx, query, page, size, mode)
    }

    // =========================================================================
    // SEARCH
    // =========================================================================

    /// Ranked, paginated search without correction.
    pub fn search(&self, query: &str, page: usize, size: usize) -> Vec<CatalogItem> {
        self.run(query, page, size, PipelineMode::Plain).items
    }

    /// Ranked, paginated search that auto-corrects misspelled words.
    pub fn search_with_correction(&self, query: &str, page: usize, size: usize) -> CorrectedSearch {
        self.run(query, page, size, PipelineMode::WithCorrection)
    }

    /// Completions for a prefix, most popular first.
    pub fn autocomplete(&self, prefix: &str) -> Vec<String> {
        self.snapshot().trie().suggest(prefix, self.config.autocomplete_limit)
    }

    /// Index vocabulary terms close to `word`, closest first.
    pub fn spelling_suggestions(&self, word: &str) -> Vec<String> {
        let snapshot = self.snapshot();
        suggest_corrections(
            word,
            snapshot.inverted().vocabulary(),
            self.config.max_edit_distance,
            self.config.max_corrections,
        )
    }

    // =========================================================================
    // ANALYTICS
    // =========================================================================

    pub fn rank_stores_by_keyword(&self, keyword: &str) -> Vec<StoreRank> {
        scoring::rank_stores_by_keyword(self.snapshot().items(), keyword)
    }

    pub fn top_searched_keywords(&self, limit: usize) -> Vec<KeywordCount> {
        self.tracker.top(limit)
    }

    pub fn keyword_frequency(&self, keyword: &str) -> u64 {
        self.tracker.frequency(keyword)
    }

    pub fn top_deals(&self, limit: usize) -> Vec<CatalogItem> {
        scoring::top_deals(self.snapshot().items(), limit)
    }

    pub fn compare(&self, req: &CompareRequest) -> Vec<CatalogItem> {
        browse::compare_items(self.snapshot().items(), req)
    }

    pub fn recommend_stores(&self, req: &RecommendRequest) -> Vec<String> {
        browse::recommend_stores(self.snapshot().items(), req)
    }

    // =========================================================================
    // BROWSING
    // =========================================================================

    pub fn item(&self, id: &str) -> Option<CatalogItem> {
        self.snapshot().item(id).cloned()
    }

    /// All items by id.
    pub fn items(&self, page: usize, size: usize) -> Vec<CatalogItem> {
        self.snapshot().page(page, size)
    }

    pub fn items_in_category(&self, category: &str, page: usize, size: usize) -> Vec<CatalogItem> {
        self.snapshot().category_page(category, page, size)
    }

    pub fn items_in_store(&self, store: &str, page: usize, size: usize) -> Vec<CatalogItem> {
        self.snapshot().store_page(store, page, size)
    }
}

impl<S: CatalogStore + std::fmt::Debug> std::fmt::Debug for CatalogEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEngine")
            .field("store", &self.store)
            .field("generation", &self.snapshot.read().generation())
            .field("tracked_keywords", &self.tracker.len())
            .finish()
    }
}
