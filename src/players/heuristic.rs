//! Computer player that plays random legal letters and avoids spelling words.

use std::sync::Arc;

use tracing::debug;

use super::GhostPlayer;
use crate::core::{GameRng, GhostError};
use crate::game::Move;
use crate::lexicon::{Letters, Lexicon};

/// Simple computer opponent.
///
/// On its turn:
/// 1. Challenges if the fragment is not a prefix.
/// 2. Otherwise picks a continuation letter uniformly at random.
/// 3. Challenges instead if that letter would spell a word of any length,
///    rather than handing the opponent a formed word. On an empty fragment
///    it never challenges; it draws only from letters that are not words
///    on their own, unless every opening letter is one.
///
/// When challenged it random-walks the trie below the fragment until it
/// reaches a word.
pub struct HeuristicPlayer {
    name: String,
    lexicon: Arc<Lexicon>,
    rng: GameRng,
}

impl HeuristicPlayer {
    /// Default display name.
    pub const DEFAULT_NAME: &'static str = "COMPUTER";

    /// Create a computer player drawing randomness from `rng`.
    pub fn new(lexicon: Arc<Lexicon>, rng: GameRng) -> Self {
        Self {
            name: Self::DEFAULT_NAME.to_string(),
            lexicon,
            rng,
        }
    }

    /// Create a computer player with its own seeded stream.
    pub fn seeded(lexicon: Arc<Lexicon>, seed: u64) -> Self {
        Self::new(lexicon, GameRng::new(seed))
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl GhostPlayer for HeuristicPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, fragment: &str) -> Result<Move, GhostError> {
        let Some(letters) = self.lexicon.valid_continuations(fragment) else {
            debug!(player = %self.name, fragment, "fragment is not a prefix, challenging");
            return Ok(Move::Challenge);
        };

        // Opening letters never challenge, so pick among those that are not
        // words themselves while any exist.
        let letters: Letters = if fragment.is_empty() {
            let safe: Letters = letters
                .iter()
                .copied()
                .filter(|letter| !self.lexicon.is_word(&letter.to_string()))
                .collect();
            if safe.is_empty() {
                letters
            } else {
                safe
            }
        } else {
            letters
        };

        // A word with nothing beneath it: any letter would be a bluff.
        let Some(&letter) = self.rng.choose(&letters) else {
            debug!(player = %self.name, fragment, "no continuations, challenging");
            return Ok(Move::Challenge);
        };

        let mut extended = String::with_capacity(fragment.len() + 1);
        extended.push_str(fragment);
        extended.push(letter);

        if !fragment.is_empty() && self.lexicon.is_word(&extended) {
            debug!(player = %self.name, fragment, letter = %letter, "letter would spell a word, challenging");
            return Ok(Move::Challenge);
        }

        debug!(player = %self.name, fragment, letter = %letter, "playing letter");
        Ok(Move::Letter(letter))
    }

    fn word_for(&mut self, fragment: &str) -> Result<String, GhostError> {
        let no_completion = || GhostError::NoCompletion {
            fragment: fragment.to_string(),
        };

        let mut word = fragment.to_string();
        // Each step descends one level, so a word is reached within the
        // depth of the trie.
        for _ in 0..=self.lexicon.longest_word_len() {
            if self.lexicon.is_word(&word) {
                debug!(player = %self.name, fragment, word = %word, "answering challenge");
                return Ok(word);
            }
            let letters = self
                .lexicon
                .valid_continuations(&word)
                .ok_or_else(no_completion)?;
            let &letter = self.rng.choose(&letters).ok_or_else(no_completion)?;
            word.push(letter);
        }

        Err(no_completion())
    }
}
