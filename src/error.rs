// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that can surface from the catalog engine.
//!
//! There are few of them. The query path never fails: rejected
//! input and empty result sets are values (see [`QueryStatus`]). What can
//! fail is everything that touches the outside world - reading the catalog,
//! parsing it, loading configuration - and all of it happens during reload.
//!
//! [`QueryStatus`]: crate::types::QueryStatus

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by catalog stores, snapshot construction, and configuration.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing file could not be read or written.
    #[error("failed to access catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog data is not a valid item list.
    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two items in one snapshot share an identifier.
    #[error("duplicate item identifier '{id}'")]
    DuplicateId { id: String },

    /// The store could not produce its items right now.
    #[error("catalog store unavailable: {0}")]
    Unavailable(String),

    /// A freshly built snapshot failed its consistency check.
    #[error("inconsistent snapshot: {0}")]
    Inconsistent(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
