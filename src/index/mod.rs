// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures built from the catalog on every reload.
//!
//! Two of them, each answering one kind of question:
//!
//! | Structure        | Question                                  | Cost       |
//! |------------------|-------------------------------------------|------------|
//! | `PrefixTrie`     | What terms start with "mil"?              | O(prefix + subtree) |
//! | `InvertedIndex`  | Which items have the word "milk"?         | O(1) per token |

pub mod inverted;
pub mod trie;

pub use inverted::{tokenize_name, InvertedIndex};
pub use trie::{PrefixTrie, Suggestion, TrieNode};
