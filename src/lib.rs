// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory catalog search with autocomplete, typo correction and
//! relevance ranking.
//!
//! A flat list of catalog items goes in; a snapshot of query structures
//! comes out; queries run against that snapshot until the next reload
//! replaces it wholesale.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐ list_all_items ┌─────────────────────────────────────┐
//! │ CatalogStore │───────────────▶│              Snapshot               │
//! └──────────────┘   (reload)     │ PrefixTrie  InvertedIndex  Scores   │
//!                                 └─────────────────────────────────────┘
//!                                                 │ Arc swap
//!                                                 ▼
//! ┌──────────────┐   query    ┌──────────────────────────────────────────┐
//! │    caller    │───────────▶│ pipeline: validate → regex → index →     │
//! └──────────────┘◀───────────│ correction → substring → rank → paginate │
//!                   page      └──────────────────────────────────────────┘
//!                                                 │ record
//!                                                 ▼
//!                                      SearchTracker + trie insert
//! ```
//!
//! | Module        | Role                                             |
//! |---------------|--------------------------------------------------|
//! | `index`       | Prefix trie, inverted index                      |
//! | `search`      | Boyer–Moore, query validation, the pipeline      |
//! | `fuzzy`       | Levenshtein distance, spelling correction        |
//! | `scoring`     | Relevance score, store ranking, top deals        |
//! | `snapshot`    | One reload's worth of consistent structures      |
//! | `engine`      | Publication, reload, the query surface           |
//! | `browse`      | Price comparison, store recommendation           |
//!
//! # Usage
//!
//! ```
//! use catalog_search::{CatalogEngine, CatalogItem, EngineConfig, MemoryStore};
//!
//! let store = MemoryStore::new(vec![
//!     CatalogItem::new("1", "Organic Milk", "Dairy", "FreshCo", "$4.99"),
//!     CatalogItem::new("2", "Rye Bread", "Bakery", "Metro", "$3.49"),
//! ]);
//! let engine = CatalogEngine::new(store, EngineConfig::default()).unwrap();
//!
//! let hits = engine.search("milk", 0, 20);
//! assert_eq!(hits[0].id, "1");
//!
//! let fixed = engine.search_with_correction("orgnic", 0, 20);
//! assert_eq!(fixed.corrected_query.as_deref(), Some("organic"));
//! ```

pub mod browse;
pub mod config;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod snapshot;
pub mod store;
pub mod testing;
pub mod tracking;
pub mod types;
pub mod utils;

pub use config::EngineConfig;
pub use engine::CatalogEngine;
pub use error::{CatalogError, Result};
pub use index::{InvertedIndex, PrefixTrie};
pub use snapshot::{Snapshot, SnapshotStats};
pub use store::{CatalogStore, JsonFileStore, MemoryStore};
pub use tracking::SearchTracker;
pub use types::{
    CatalogItem, CompareRequest, CorrectedSearch, DealType, KeywordCount, MatchStage, QueryStatus,
    RecommendRequest, StoreRank,
};
