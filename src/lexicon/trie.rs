//! Prefix-lookup dictionary backed by a character trie.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::node::{Letters, TrieNode};

/// Counters gathered while building a lexicon from raw lines.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Lines offered to the builder.
    pub lines_read: usize,
    /// Blank lines skipped.
    pub blank: usize,
    /// Lines skipped for containing non-letters.
    pub rejected: usize,
    /// Words already present.
    pub duplicates: usize,
    /// Words added.
    pub inserted: usize,
}

enum Line {
    Blank,
    Rejected,
    Word(String),
}

fn normalize(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Line::Blank
    } else if trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        Line::Word(trimmed.to_ascii_lowercase())
    } else {
        Line::Rejected
    }
}

/// Read-only word list answering prefix, word and continuation queries.
///
/// Built once, then shared (typically as `Arc<Lexicon>`) by the game and
/// every computer player. All queries are a single top-down walk, linear
/// in the input length.
///
/// Every node reachable from the root has at least one word beneath it:
/// nodes are only created along the path of a non-empty inserted word,
/// whose last node is then marked.
///
/// ```
/// use rust_ghost::lexicon::Lexicon;
///
/// let lexicon = Lexicon::from_words(["hi", "hat", "hit", "hop", "hopefulness"]);
///
/// assert!(lexicon.has_prefix("h"));
/// assert!(!lexicon.has_prefix("it"));
/// assert!(!lexicon.has_word("hopefuln", 0));
/// assert!(lexicon.has_word("hopefulness", 0));
/// assert_eq!(lexicon.valid_continuations("h").unwrap().as_slice(), &['a', 'i', 'o']);
/// assert!(lexicon.valid_continuations("haz").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    root: TrieNode,
    word_count: usize,
    node_count: usize,
    longest_word_len: usize,
    stats: LoadStats,
}

impl Lexicon {
    /// Create an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a lexicon from raw dictionary lines.
    ///
    /// Lines are trimmed and lowercased. Blank lines are skipped, as are
    /// lines containing anything but ASCII letters.
    pub fn from_words<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        let mut stats = LoadStats::default();

        for line in lines {
            stats.lines_read += 1;
            match normalize(line.as_ref()) {
                Line::Blank => stats.blank += 1,
                Line::Rejected => {
                    debug!(line = line.as_ref(), "skipping non-alphabetic dictionary line");
                    stats.rejected += 1;
                }
                Line::Word(word) => {
                    if lexicon.insert(&word) {
                        stats.inserted += 1;
                    } else {
                        stats.duplicates += 1;
                    }
                }
            }
        }

        info!(
            lines = stats.lines_read,
            words = stats.inserted,
            duplicates = stats.duplicates,
            rejected = stats.rejected,
            nodes = lexicon.node_count,
            "lexicon loaded"
        );

        lexicon.stats = stats;
        lexicon
    }

    /// Add an already-normalized word.
    ///
    /// Empty strings are ignored. Returns `true` if the word was new;
    /// inserting a word twice changes nothing.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let mut node = &mut self.root;
        let mut len = 0;
        for ch in word.chars() {
            let mut created = false;
            node = node.get_or_insert(ch, &mut created);
            if created {
                self.node_count += 1;
            }
            len += 1;
        }

        let added = node.mark_word();
        if added {
            self.word_count += 1;
            self.longest_word_len = self.longest_word_len.max(len);
        }
        added
    }

    /// Node at the end of the path spelling `s`, if the path exists.
    fn traverse(&self, s: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in s.chars() {
            node = node.get(ch)?;
        }
        Some(node)
    }

    /// True if `s` is empty or is the beginning of some word.
    #[must_use]
    pub fn has_prefix(&self, s: &str) -> bool {
        self.traverse(s).is_some()
    }

    /// True if `s` is a word of at least `min_length` letters.
    #[must_use]
    pub fn has_word(&self, s: &str, min_length: usize) -> bool {
        self.traverse(s)
            .is_some_and(|node| node.is_word() && s.chars().count() >= min_length)
    }

    /// True if `s` is a word, regardless of length.
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.has_word(s, 0)
    }

    /// Letters that can follow `prefix`.
    ///
    /// `None` means `prefix` is not a prefix at all. An empty set means
    /// `prefix` is a word with nothing beneath it.
    #[must_use]
    pub fn valid_continuations(&self, prefix: &str) -> Option<Letters> {
        self.traverse(prefix).map(TrieNode::next_letters)
    }

    /// The root node, for callers that want to walk the trie themselves.
    #[must_use]
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, not counting the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Length of the longest word, in letters.
    #[must_use]
    pub fn longest_word_len(&self) -> usize {
        self.longest_word_len
    }

    /// True if no words have been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Counters from [`from_words`](Lexicon::from_words). Zero for lexicons built by `insert`.
    #[must_use]
    pub fn load_stats(&self) -> LoadStats {
        self.stats
    }

    /// Indented rendering of the whole trie, one node per line.
    ///
    /// Each line shows the node's letter (`*` for the root), its
    /// continuation letters and an `EOW` marker for word ends.
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![(0usize, &self.root)];

        while let Some((depth, node)) = stack.pop() {
            let letter = node.letter().unwrap_or('*');
            let next: Vec<String> = node.next_letters().iter().map(char::to_string).collect();
            let eow = if node.is_word() { " EOW" } else { "" };
            out.push_str(&format!("{}{} --> [{}]{}\n", "\t".repeat(depth), letter, next.join(", "), eow));

            let children: Vec<_> = node.children().collect();
            stack.extend(children.into_iter().rev().map(|child| (depth + 1, child)));
        }

        out
    }
}
