// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix trie for autocomplete.
//!
//! Every indexed term (item names, their longer words, and whatever users
//! search for) lives here with a frequency counter. Autocomplete walks to the
//! prefix node in O(prefix) and then collects the whole subtree, so popular
//! terms float to the top of the suggestions.
//!
//! # Concurrency
//!
//! The trie is part of a published snapshot, which is otherwise read-only.
//! Query tracking is the exception: every search inserts its raw query, from
//! a shared read path. So inserts take `&self`:
//!
//! - each node guards its own child map with a `RwLock`, held only while
//!   looking up or creating a single child
//! - the end-of-word flag and frequency are atomics
//!
//! Children are `Arc`ed so a descent can drop the parent's lock before it
//! moves on. Nodes are only ever created by descending from the root, so the
//! structure stays a tree.
//!
//! # Invariants
//!
//! 1. **ROOT_NOT_A_WORD**: blank input is a no-op, so the root is never end-of-word
//! 2. **FREQUENCY_MONOTONE**: frequency only grows, except on `clear()`
//! 3. **COMPLETE_COLLECTION**: `suggest` visits every end-of-word node under the prefix exactly once

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// A single trie node. Only reachable through its parent.
#[derive(Debug, Default)]
pub struct TrieNode {
    children: RwLock<HashMap<char, Arc<TrieNode>>>,
    end_of_word: AtomicBool,
    frequency: AtomicU64,
}

impl TrieNode {
    #[inline]
    pub fn is_end_of_word(&self) -> bool {
        self.end_of_word.load(Ordering::Acquire)
    }

    #[inline]
    pub fn frequency(&self) -> u64 {
        self.frequency.load(Ordering::Acquire)
    }

    fn child(&self, ch: char) -> Option<Arc<TrieNode>> {
        self.children.read().get(&ch).cloned()
    }

    /// Existing child for `ch`, or a fresh one. Only this node's lock is taken.
    fn child_or_insert(&self, ch: char) -> Arc<TrieNode> {
        if let Some(existing) = self.child(ch) {
            return existing;
        }
        self.children
            .write()
            .entry(ch)
            .or_insert_with(|| Arc::new(TrieNode::default()))
            .clone()
    }
}

/// An autocomplete candidate: the completed word and how often it was inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: String,
    pub frequency: u64,
}

/// Character trie with per-term frequency counts.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    root: TrieNode,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word (lowercased and trimmed), bumping its frequency by one.
    ///
    /// Blank input is ignored.
    pub fn insert(&self, word: &str) {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return;
        }

        let mut chars = word.chars();
        // Non-empty, so there is at least one char.
        let Some(first) = chars.next() else { return };
        let mut current = self.root.child_or_insert(first);
        for ch in chars {
            current = current.child_or_insert(ch);
        }

        current.frequency.fetch_add(1, Ordering::AcqRel);
        current.end_of_word.store(true, Ordering::Release);
    }

    /// Was exactly this word inserted?
    pub fn contains_exact(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return false;
        }
        self.find(&word).is_some_and(|node| node.is_end_of_word())
    }

    /// How many times was this exact word inserted? 0 if never.
    pub fn frequency(&self, word: &str) -> u64 {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return 0;
        }
        match self.find(&word) {
            Some(node) if node.is_end_of_word() => node.frequency(),
            _ => 0,
        }
    }

    /// Walk to the node for a non-empty normalized prefix.
    fn find(&self, prefix: &str) -> Option<Arc<TrieNode>> {
        let mut chars = prefix.chars();
        let mut current = self.root.child(chars.next()?)?;
        for ch in chars {
            current = current.child(ch)?;
        }
        Some(current)
    }

    /// Completions of `prefix`, most frequent first, then alphabetical.
    ///
    /// Returns at most `limit` words. Empty for a blank prefix or one that
    /// leads nowhere. The prefix itself is included if it is a word.
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        self.suggest_with_frequency(prefix, limit)
            .into_iter()
            .map(|s| s.word)
            .collect()
    }

    /// Like [`suggest`](Self::suggest), but keeps the frequencies.
    pub fn suggest_with_frequency(&self, prefix: &str, limit: usize) -> Vec<Suggestion> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() || limit == 0 {
            return Vec::new();
        }
        let Some(start) = self.find(&prefix) else {
            return Vec::new();
        };

        let mut found = collect_words(start, prefix);
        found.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.word.cmp(&b.word))
        });
        found.truncate(limit);
        found
    }

    /// Number of distinct words stored.
    pub fn len(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<Arc<TrieNode>> = self.root.children.read().values().cloned().collect();
        while let Some(node) = stack.pop() {
            if node.is_end_of_word() {
                count += 1;
            }
            stack.extend(node.children.read().values().cloned());
        }
        count
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.read().is_empty()
    }

    /// Drop every node below the root.
    pub fn clear(&self) {
        self.root.children.write().clear();
    }
}

/// Depth-first collection of every end-of-word node under `start`.
///
/// Explicit stack instead of recursion, so a pathological 20k-char term
/// can't blow the call stack. The current path is one shared buffer that
/// each popped entry truncates back to its parent's depth, so memory stays
/// linear in the subtree size. Each node has exactly one parent and is
/// pushed exactly once, so each word is emitted exactly once.
fn collect_words(start: Arc<TrieNode>, prefix: String) -> Vec<Suggestion> {
    let mut found = Vec::new();
    let mut path: Vec<char> = prefix.chars().collect();
    let mut stack: Vec<(Arc<TrieNode>, Option<char>, usize)> = vec![(start, None, path.len())];

    while let Some((node, ch, depth)) = stack.pop() {
        path.truncate(depth);
        if let Some(ch) = ch {
            path.push(ch);
        }

        if node.is_end_of_word() {
            found.push(Suggestion {
                word: path.iter().collect(),
                frequency: node.frequency(),
            });
        }

        let children = node.children.read();
        for (&next, child) in children.iter() {
            stack.push((Arc::clone(child), Some(next), path.len()));
        }
    }

    found
}

// Dropping a long chain of nodes recursively would recurse once per
// character. Unlink children onto a heap stack instead.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<Arc<TrieNode>> = self.children.get_mut().drain().map(|(_, c)| c).collect();
        while let Some(node) = stack.pop() {
            if let Ok(mut inner) = Arc::try_unwrap(node) {
                stack.extend(inner.children.get_mut().drain().map(|(_, c)| c));
            }
        }
    }
}
