// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catalog-search command-line interface.
//!
//! Every subcommand loads a JSON catalog file into a fresh engine and runs
//! one query against it. Results go to stdout (boxed and coloured on a
//! terminal, or JSON with `--json`); logs go to stderr.

pub mod display;

use anyhow::{Context, Result};
use catalog_search::{CatalogEngine, EngineConfig, JsonFileStore};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "In-memory catalog search with autocomplete, typo correction and relevance ranking",
    version
)]
pub struct Cli {
    /// Catalog file: a JSON array of items
    #[arg(short, long, global = true, default_value = "data/sample_catalog.json")]
    pub catalog: PathBuf,

    /// Engine config file (JSON); defaults apply to anything it leaves out
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "catalog_search=trace". Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ranked search without correction
    Search {
        query: String,

        /// Zero-based page number
        #[arg(short, long, default_value = "0")]
        page: usize,

        /// Results per page (defaults to the configured page size)
        #[arg(short, long)]
        size: Option<usize>,
    },

    /// Ranked search that auto-corrects misspelled words
    Correct {
        query: String,

        #[arg(short, long, default_value = "0")]
        page: usize,

        #[arg(short, long)]
        size: Option<usize>,
    },

    /// Complete a prefix from item names and past searches
    Autocomplete { prefix: String },

    /// Rank stores by how often a keyword appears in their item names
    RankStores { keyword: String },

    /// Items with the biggest discounts
    Deals {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show snapshot statistics for the catalog
    Inspect,
}

/// Build the engine the subcommands share.
fn load_engine(cli: &Cli) -> Result<CatalogEngine<JsonFileStore>> {
    let config = match &cli.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    CatalogEngine::new(JsonFileStore::new(&cli.catalog), config)
        .with_context(|| format!("loading catalog from {}", cli.catalog.display()))
}

/// Run one subcommand to completion.
pub fn run(cli: &Cli) -> Result<()> {
    let engine = load_engine(cli)?;
    let page_size = |size: Option<usize>| size.unwrap_or(engine.config().default_page_size);

    match &cli.command {
        Commands::Search { query, page, size } => {
            let items = engine.search(query, *page, page_size(*size));
            if cli.json {
                display::print_json(&items)?;
            } else {
                display::print_items(query, &items);
            }
        }
        Commands::Correct { query, page, size } => {
            let result = engine.search_with_correction(query, *page, page_size(*size));
            if cli.json {
                display::print_json(&result)?;
            } else {
                display::print_corrected(&result);
            }
        }
        Commands::Autocomplete { prefix } => {
            let suggestions = engine.autocomplete(prefix);
            if cli.json {
                display::print_json(&suggestions)?;
            } else {
                display::print_suggestions(prefix, &suggestions);
            }
        }
        Commands::RankStores { keyword } => {
            let ranked = engine.rank_stores_by_keyword(keyword);
            if cli.json {
                display::print_json(&ranked)?;
            } else {
                display::print_store_ranks(keyword, &ranked);
            }
        }
        Commands::Deals { limit } => {
            let deals = engine.top_deals(*limit);
            if cli.json {
                display::print_json(&deals)?;
            } else {
                display::print_deals(&deals);
            }
        }
        Commands::Inspect => {
            let snapshot = engine.snapshot();
            let stats = snapshot.stats();
            if cli.json {
                display::print_json(&stats)?;
            } else {
                display::print_stats(&cli.catalog, &stats, &snapshot.stores());
            }
        }
    }
    Ok(())
}
