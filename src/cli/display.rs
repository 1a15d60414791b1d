// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the catalog-search CLI.
//!
//! Pretty terminal output that respects your color scheme. OneDark for dark
//! terminals, One Light for light ones. The detection tries `CATALOG_THEME`
//! first (for explicit control), then `COLORFGBG` (set by some terminals),
//! then defaults to dark because most developers live there.
//!
//! Respects `NO_COLOR` for the purists and non-TTY detection for pipelines.

use catalog_search::scoring::discount_percent;
use catalog_search::{CatalogItem, CorrectedSearch, MatchStage, QueryStatus, SnapshotStats, StoreRank};
use serde::Serialize;
use std::io::{IsTerminal, Write};
use std::path::Path;
use std::sync::OnceLock;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CATALOG_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light.
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221); // #c678dd
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164); // #a626a4
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(text: &str) -> String {
    themed(GRAY, &[], text)
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut `text` to at most `max` chars, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

fn empty_row(message: &str) {
    row(&format!(" {}", themed(GRAY, &[DIM], message)));
}

// ═══════════════════════════════════════════════════════════════════════════
// RESULT RENDERING
// ═══════════════════════════════════════════════════════════════════════════

/// Serialize any result as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn item_row(position: usize, item: &CatalogItem) {
    let name = truncate(&item.name, 34);
    let price = item
        .effective_price()
        .map_or_else(|| item.price.clone(), |p| format!("${:.2}", p));
    let deal = item
        .deal_type
        .as_ref()
        .filter(|d| d.is_deal())
        .map(|d| themed(MAGENTA, &[BOLD], d.as_str()))
        .unwrap_or_default();
    row(&format!(
        " {:>3}. {:<34} {:<12} {} {}",
        position,
        name,
        truncate(&item.store_name, 12),
        themed(GREEN, &[], &format!("{:>9}", price)),
        deal
    ));
}

fn item_rows(items: &[CatalogItem]) {
    if items.is_empty() {
        empty_row("no results");
    }
    for (i, item) in items.iter().enumerate() {
        item_row(i + 1, item);
    }
}

pub fn print_items(query: &str, items: &[CatalogItem]) {
    section_top(&format!("SEARCH \"{}\"", truncate(query, 40)));
    item_rows(items);
    section_bot();
}

fn stage_label(status: QueryStatus) -> &'static str {
    match status {
        QueryStatus::Rejected => "rejected",
        QueryStatus::NoMatch => "no match",
        QueryStatus::Matched(MatchStage::Regex) => "pattern",
        QueryStatus::Matched(MatchStage::Index) => "keyword",
        QueryStatus::Matched(MatchStage::Correction) => "corrected",
        QueryStatus::Matched(MatchStage::Substring) => "substring",
    }
}

pub fn print_corrected(result: &CorrectedSearch) {
    section_top(&format!("SEARCH \"{}\"", truncate(&result.original_query, 40)));
    row(&format!(" status: {}", themed(YELLOW, &[], stage_label(result.status))));
    if let Some(corrected) = &result.corrected_query {
        row(&format!(" showing results for {}", themed(BLUE, &[BOLD], corrected)));
    }
    if !result.suggestions.is_empty() {
        row(&format!(
            " did you mean: {}",
            themed(GRAY, &[], &result.suggestions.join(", "))
        ));
    }
    item_rows(&result.items);
    section_bot();
}

pub fn print_suggestions(prefix: &str, suggestions: &[String]) {
    section_top(&format!("AUTOCOMPLETE \"{}\"", truncate(prefix, 40)));
    if suggestions.is_empty() {
        empty_row("no completions");
    }
    for suggestion in suggestions {
        row(&format!(" {}", truncate(suggestion, BOX_WIDTH - 2)));
    }
    section_bot();
}

pub fn print_store_ranks(keyword: &str, ranked: &[StoreRank]) {
    section_top(&format!("STORES BY \"{}\"", truncate(keyword, 40)));
    if ranked.is_empty() {
        empty_row("no store mentions this keyword");
    }
    for rank in ranked {
        row(&format!(
            " {:>3}. {:<40} {}",
            rank.rank,
            truncate(&rank.store_name, 40),
            themed(GREEN, &[BOLD], &rank.occurrences.to_string())
        ));
    }
    section_bot();
}

pub fn print_deals(deals: &[CatalogItem]) {
    section_top("TOP DEALS");
    if deals.is_empty() {
        empty_row("no deals");
    }
    for (i, item) in deals.iter().enumerate() {
        row(&format!(
            " {:>3}. {:<40} {}",
            i + 1,
            truncate(&item.name, 40),
            themed(YELLOW, &[BOLD], &format!("{:.1}% off", discount_percent(item)))
        ));
    }
    section_bot();
}

pub fn print_stats(catalog: &Path, stats: &SnapshotStats, stores: &[&str]) {
    section_top("CATALOG");
    row(&format!(" file        {}", truncate(&catalog.display().to_string(), 58)));
    row(&format!(" generation  {}", stats.generation));
    row(&format!(" items       {}", stats.items));
    row(&format!(" vocabulary  {}", stats.vocabulary));
    row(&format!(" trie terms  {}", stats.trie_terms));
    row(&format!(" categories  {}", stats.categories));
    row(&format!(" stores      {}", stats.stores));
    for store in stores {
        row(&format!("   {}", themed(GRAY, &[], &truncate(store, 60))));
    }
    section_bot();
}
