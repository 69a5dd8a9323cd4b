//! Match configuration.
//!
//! `GhostConfig` carries the rule constants the engine honors and the seed
//! used to derive computer players' random streams.

use serde::{Deserialize, Serialize};

use super::PlayerId;

/// Minimum length for a fragment to count as a formed word.
///
/// The dictionary is littered with obscure two-letter words, so shorter
/// fragments never end a round.
pub const MIN_WORD_LENGTH: usize = 3;

/// Raw input character that signals a challenge instead of a letter.
pub const CHALLENGE: char = '!';

/// Configuration for a Ghost match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostConfig {
    /// A fragment of at least this many letters that spells a word ends the round.
    pub min_word_length: usize,

    /// Raw input character parsed as a challenge.
    pub challenge: char,

    /// Seat that moves first in the very first round.
    /// Later rounds start with the previous round's loser.
    pub first_mover: PlayerId,

    /// Seed for computer players' RNG streams.
    pub seed: u64,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            min_word_length: MIN_WORD_LENGTH,
            challenge: CHALLENGE,
            first_mover: PlayerId::SECOND,
            seed: 42,
        }
    }
}

impl GhostConfig {
    /// Set the minimum formed-word length.
    #[must_use]
    pub fn with_min_word_length(mut self, len: usize) -> Self {
        self.min_word_length = len;
        self
    }

    /// Set the challenge sentinel.
    #[must_use]
    pub fn with_challenge(mut self, sentinel: char) -> Self {
        self.challenge = sentinel;
        self
    }

    /// Set who moves first in round one.
    #[must_use]
    pub fn with_first_mover(mut self, player: PlayerId) -> Self {
        self.first_mover = player;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
