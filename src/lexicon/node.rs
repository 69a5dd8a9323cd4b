//! Trie node.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Set of continuation letters, sorted ascending.
///
/// SmallVec keeps the typical branching factor off the heap.
pub type Letters = SmallVec<[char; 8]>;

/// One letter position in the trie.
///
/// The root has no letter and stands for the empty prefix. Every other
/// node is stored in its parent's `children` under its own letter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TrieNode {
    letter: Option<char>,
    children: FxHashMap<char, TrieNode>,
    end_of_word: bool,
}

impl TrieNode {
    /// Create the root node.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    pub(crate) fn with_letter(letter: char) -> Self {
        Self {
            letter: Some(letter),
            ..Self::default()
        }
    }

    /// Letter on the incoming edge. `None` for the root.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.letter
    }

    /// True if the path from the root to this node spells a word.
    #[must_use]
    pub fn is_word(&self) -> bool {
        self.end_of_word
    }

    pub(crate) fn mark_word(&mut self) -> bool {
        !std::mem::replace(&mut self.end_of_word, true)
    }

    /// Child reached by `letter`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> Option<&TrieNode> {
        self.children.get(&letter)
    }

    /// Child reached by `letter`, created if missing.
    ///
    /// The flag is set when a node had to be created.
    pub(crate) fn get_or_insert(&mut self, letter: char, created: &mut bool) -> &mut TrieNode {
        self.children.entry(letter).or_insert_with(|| {
            *created = true;
            TrieNode::with_letter(letter)
        })
    }

    /// Number of outgoing edges.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Outgoing edge letters, sorted.
    #[must_use]
    pub fn next_letters(&self) -> Letters {
        let mut letters: Letters = self.children.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Children in letter order.
    pub fn children(&self) -> impl Iterator<Item = &TrieNode> {
        let mut children: Vec<_> = self.children.iter().collect();
        children.sort_unstable_by_key(|(letter, _)| **letter);
        children.into_iter().map(|(_, node)| node)
    }
}
