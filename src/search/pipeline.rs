// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query pipeline: validate, try each strategy in order, rank, paginate.
//!
//! Strategies run cheapest-to-explain first and stop at the first one that
//! produces candidates:
//!
//! ```text
//! validate ──reject──▶ Rejected
//!    │
//!    ▼
//! regex (pattern-looking queries only)
//!    │ nothing
//!    ▼
//! inverted index (union over query tokens)
//!    │ nothing
//!    ▼
//! correction (WithCorrection mode only) ──corrected──▶ re-run Plain on the corrected query
//!    │ nothing to correct
//!    ▼
//! substring scan (Boyer–Moore over every name)
//!    │
//!    ▼
//! rank by relevance, slice out the page
//! ```
//!
//! Plain search and search-with-correction are one pipeline with a mode
//! flag; the only difference is whether the correction stage runs.
//!
//! # Tracking
//!
//! Every query that passes validation is recorded once in the frequency
//! counter and inserted into the snapshot's trie, so popular queries show
//! up in autocomplete. A corrected re-run is its own invocation and records
//! the corrected query too.
//!
//! # Pattern queries
//!
//! Pattern-looking queries compile with the `regex` crate, whose matching
//! time is linear in the input. The compiled program size is capped by
//! `EngineConfig::regex_size_limit`; a query over the cap, or one that
//! doesn't parse, quietly moves on to the next stage.

use crate::config::EngineConfig;
use crate::fuzzy::suggest_corrections;
use crate::scoring::compare_by_relevance;
use crate::search::boyer_moore::BoyerMoore;
use crate::search::query::{has_regex_tokens, validate_query};
use crate::snapshot::Snapshot;
use crate::tracking::SearchTracker;
use crate::types::{CatalogItem, CorrectedSearch, MatchStage, QueryStatus};
use crate::utils::{normalize, normalize_token, paginate};
use regex::RegexBuilder;
use std::collections::HashSet;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Which entry point is running the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMode {
    /// Regex, index, substring. No correction reporting.
    Plain,
    /// Regex, index, correction, substring.
    WithCorrection,
}

/// Everything a pipeline run reads or records into.
#[derive(Debug, Clone, Copy)]
pub struct PipelineContext<'a> {
    pub snapshot: &'a Snapshot,
    pub tracker: &'a SearchTracker,
    pub config: &'a EngineConfig,
}

/// Run one query through the pipeline and return the requested page.
///
/// Never fails. Rejected input and empty results come back as values,
/// distinguished by `status`.
pub fn run_pipeline(
    ctx: PipelineContext<'_>,
    query: &str,
    page: usize,
    size: usize,
    mode: PipelineMode,
) -> CorrectedSearch {
    if !validate_query(query, ctx.config) {
        debug!(query, "query rejected");
        return CorrectedSearch::rejected(query);
    }

    ctx.tracker.record(query);
    ctx.snapshot.trie().insert(query);

    let normalized = normalize(query);
    let snapshot = ctx.snapshot;

    let mut found = regex_stage(snapshot, &normalized, ctx.config).map(|c| (MatchStage::Regex, c));

    if found.is_none() {
        found = index_stage(snapshot, &normalized).map(|c| (MatchStage::Index, c));
    }

    if found.is_none() && mode == PipelineMode::WithCorrection {
        if let Some(corrected) = correction_stage(ctx, query, &normalized, page, size) {
            return corrected;
        }
    }

    if found.is_none() {
        let matches = substring_stage(snapshot, &normalized);
        if !matches.is_empty() {
            found = Some((MatchStage::Substring, matches));
        }
    }

    let Some((stage, mut candidates)) = found else {
        debug!(query, "no stage produced candidates");
        return CorrectedSearch {
            items: Vec::new(),
            original_query: query.to_string(),
            corrected_query: None,
            suggestions: Vec::new(),
            status: QueryStatus::NoMatch,
        };
    };

    debug!(query, ?stage, candidates = candidates.len(), "query matched");
    candidates.sort_by(|a, b| compare_by_relevance(a, b, snapshot.scores()));

    CorrectedSearch {
        items: paginate(&candidates, page, size).into_iter().cloned().collect(),
        original_query: query.to_string(),
        corrected_query: None,
        suggestions: Vec::new(),
        status: QueryStatus::Matched(stage),
    }
}

// =============================================================================
// STAGES
// =============================================================================

/// Items whose lowercased name contains a match for the query as a pattern.
///
/// `None` if the query has no metacharacters, fails to compile, or matches
/// nothing.
fn regex_stage<'s>(snapshot: &'s Snapshot, normalized: &str, config: &EngineConfig) -> Option<Vec<&'s CatalogItem>> {
    if !has_regex_tokens(normalized) {
        return None;
    }

    let pattern = match RegexBuilder::new(normalized)
        .case_insensitive(true)
        .size_limit(config.regex_size_limit)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            trace!(query = normalized, %err, "pattern did not compile, skipping regex stage");
            return None;
        }
    };

    let matches = scan(snapshot.items(), |name| pattern.is_match(name));
    (!matches.is_empty()).then_some(matches)
}

/// Union of the index entries for every query token.
///
/// `None` if no token is in the index.
fn index_stage<'s>(snapshot: &'s Snapshot, normalized: &str) -> Option<Vec<&'s CatalogItem>> {
    let index = snapshot.inverted();
    let mut ids: HashSet<&str> = HashSet::new();
    let mut hit = false;

    for word in normalized.split_whitespace() {
        if let Some(entry) = index.get(&normalize_token(word)) {
            hit = true;
            ids.extend(entry.iter().map(String::as_str));
        }
    }

    if !hit {
        return None;
    }
    let items: Vec<&CatalogItem> = ids.into_iter().filter_map(|id| snapshot.item(id)).collect();
    (!items.is_empty()).then_some(items)
}

/// Replace unknown tokens with their closest vocabulary term and search again.
///
/// Tokens already in the vocabulary, and tokens with no correction in range,
/// are kept as typed. Returns `None` when nothing was corrected.
fn correction_stage(
    ctx: PipelineContext<'_>,
    query: &str,
    normalized: &str,
    page: usize,
    size: usize,
) -> Option<CorrectedSearch> {
    let index = ctx.snapshot.inverted();
    let mut words: Vec<String> = Vec::new();
    let mut suggestions: Vec<String> = Vec::new();

    for word in normalized.split_whitespace() {
        if index.contains_token(&normalize_token(word)) {
            words.push(word.to_string());
            continue;
        }

        let found = suggest_corrections(
            word,
            index.vocabulary(),
            ctx.config.max_edit_distance,
            ctx.config.max_corrections,
        );
        match found.first() {
            Some(best) => words.push(best.clone()),
            None => words.push(word.to_string()),
        }
        suggestions.extend(found);
    }

    let corrected = words.join(" ");
    if corrected == normalized || suggestions.is_empty() {
        return None;
    }

    let mut seen = HashSet::new();
    suggestions.retain(|s| seen.insert(s.clone()));
    suggestions.truncate(ctx.config.max_corrections);

    debug!(query, corrected = %corrected, "auto-corrected query");
    let rerun = run_pipeline(ctx, &corrected, page, size, PipelineMode::Plain);

    let status = match rerun.status {
        QueryStatus::Matched(_) => QueryStatus::Matched(MatchStage::Correction),
        other => other,
    };

    Some(CorrectedSearch {
        items: rerun.items,
        original_query: query.to_string(),
        corrected_query: Some(corrected),
        suggestions,
        status,
    })
}

/// Items whose lowercased name contains the query literally.
fn substring_stage<'s>(snapshot: &'s Snapshot, normalized: &str) -> Vec<&'s CatalogItem> {
    let matcher = BoyerMoore::new(normalized);
    scan(snapshot.items(), |name| matcher.find_in(name))
}

/// Every item whose lowercased name satisfies `matches`, in catalog order.
fn scan<'s>(items: &'s [CatalogItem], matches: impl Fn(&str) -> bool + Sync) -> Vec<&'s CatalogItem> {
    #[cfg(feature = "parallel")]
    {
        items
            .par_iter()
            .filter(|item| matches(&item.name.to_lowercase()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items
            .iter()
            .filter(|item| matches(&item.name.to_lowercase()))
            .collect()
    }
}
