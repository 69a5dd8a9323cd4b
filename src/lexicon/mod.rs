//! Dictionary lookups for the game.
//!
//! A character trie built once from a word list and read-only afterwards.
//! It answers three questions about a fragment:
//! - Is it the beginning of some word? (`has_prefix`)
//! - Is it a word, optionally of a minimum length? (`has_word`)
//! - Which letters may follow it? (`valid_continuations`)

mod node;
mod trie;

pub use node::{Letters, TrieNode};
pub use trie::{Lexicon, LoadStats};
