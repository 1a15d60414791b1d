// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine tuning knobs.
//!
//! Every field has a default that matches the documented query contract, so
//! an empty JSON object (or no config file at all) gives the standard
//! behavior. Override only what you need.

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Shortest accepted query, in characters (after trimming).
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Longest accepted query, in characters (after trimming).
pub const DEFAULT_MAX_QUERY_LEN: usize = 100;

/// Largest edit distance still considered a typo.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Corrections fetched per misspelled token, and suggestions reported per query.
pub const DEFAULT_MAX_CORRECTIONS: usize = 5;

/// Autocomplete entries returned per prefix.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 10;

/// Tokens shorter than this never enter the inverted index.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;

/// Compiled-program budget for pattern queries (bytes).
pub const DEFAULT_REGEX_SIZE_LIMIT: usize = 1 << 20;

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Configuration for a [`CatalogEngine`](crate::CatalogEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub min_query_len: usize,
    pub max_query_len: usize,
    pub max_edit_distance: usize,
    pub max_corrections: usize,
    pub autocomplete_limit: usize,
    pub min_token_len: usize,
    pub regex_size_limit: usize,
    pub default_page_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            max_query_len: DEFAULT_MAX_QUERY_LEN,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            max_corrections: DEFAULT_MAX_CORRECTIONS,
            autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            regex_size_limit: DEFAULT_REGEX_SIZE_LIMIT,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl EngineConfig {
    /// Load and validate a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make every query fail or every page empty.
    pub fn validate(&self) -> Result<()> {
        if self.min_query_len == 0 {
            return Err(CatalogError::Config(
                "minQueryLen must be at least 1".to_string(),
            ));
        }
        if self.min_query_len > self.max_query_len {
            return Err(CatalogError::Config(format!(
                "minQueryLen {} exceeds maxQueryLen {}",
                self.min_query_len, self.max_query_len
            )));
        }
        if self.autocomplete_limit == 0 {
            return Err(CatalogError::Config(
                "autocompleteLimit must be at least 1".to_string(),
            ));
        }
        if self.default_page_size == 0 {
            return Err(CatalogError::Config(
                "defaultPageSize must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
