//! How a round ended.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// The three ways a round can end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The mover completed a word of the minimum length and lost.
    FormedWord,
    /// The challenger won: the opponent could not name a word.
    WonChallenge,
    /// The challenger lost: the opponent named a valid word.
    LostChallenge,
}

/// Report of a resolved round, for display and history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    /// 1-based round number within the match.
    pub round: u32,
    /// Seat that opened the round.
    pub first_mover: PlayerId,
    /// Seat awarded the round.
    pub winner: PlayerId,
    /// Seat that lost; it opens the next round.
    pub loser: PlayerId,
    /// How the round ended.
    pub outcome: RoundOutcome,
    /// Fragment when the round ended.
    pub fragment: String,
    /// Word offered in answer to a challenge, if any.
    pub word: Option<String>,
}

impl RoundResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner == player
    }
}
