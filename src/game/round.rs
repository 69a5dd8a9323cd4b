//! Single-round state machine.
//!
//! ```text
//! AwaitingMove(p) --letter--> AwaitingMove(other)      fragment not a word yet
//!                 --letter--> Resolved(FormedWord)     mover spelled a word
//!                 --challenge--> AwaitingWord(other)
//! AwaitingWord(p) --word--> Resolved(LostChallenge | WonChallenge)
//! ```
//!
//! The round only consults the lexicon; asking players for moves is the
//! job of [`Game`](super::Game).

use tracing::debug;

use super::moves::Move;
use super::outcome::{RoundOutcome, RoundResult};
use crate::core::{GhostError, PlayerId};
use crate::lexicon::Lexicon;

/// Where the round stands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundPhase {
    /// Waiting for `player` to add a letter or challenge.
    AwaitingMove { player: PlayerId },
    /// `player` has been challenged and must name a word.
    AwaitingWord { player: PlayerId },
    /// Round over.
    Resolved(RoundResult),
}

impl RoundPhase {
    fn name(&self) -> &'static str {
        match self {
            RoundPhase::AwaitingMove { .. } => "awaiting a move",
            RoundPhase::AwaitingWord { .. } => "awaiting a word",
            RoundPhase::Resolved(_) => "resolved",
        }
    }
}

/// State of one round: who is to move, the shared fragment, and the phase.
#[derive(Clone, Debug)]
pub struct Round {
    number: u32,
    first_mover: PlayerId,
    current: PlayerId,
    opponent: PlayerId,
    fragment: String,
    min_word_length: usize,
    phase: RoundPhase,
}

impl Round {
    /// Start round `number` with `first` to move and an empty fragment.
    #[must_use]
    pub fn new(number: u32, first: PlayerId, min_word_length: usize) -> Self {
        Self {
            number,
            first_mover: first,
            current: first,
            opponent: first.other(),
            fragment: String::new(),
            min_word_length,
            phase: RoundPhase::AwaitingMove { player: first },
        }
    }

    /// Start a round from a fragment already in play.
    #[must_use]
    pub fn resume(number: u32, current: PlayerId, fragment: &str, min_word_length: usize) -> Self {
        let mut round = Self::new(number, current, min_word_length);
        round.fragment.push_str(fragment);
        round
    }

    /// 1-based round number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Seat that opened the round.
    #[must_use]
    pub fn first_mover(&self) -> PlayerId {
        self.first_mover
    }

    /// The player whose move is (or was, once resolved) being taken.
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    /// The current player's opponent.
    #[must_use]
    pub fn opponent(&self) -> PlayerId {
        self.opponent
    }

    /// Letters played so far.
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> &RoundPhase {
        &self.phase
    }

    /// True once a winner has been decided.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self.phase, RoundPhase::Resolved(_))
    }

    /// The result, once resolved.
    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        match &self.phase {
            RoundPhase::Resolved(result) => Some(result),
            _ => None,
        }
    }

    /// Consume the round, returning its result.
    pub fn into_result(self) -> Result<RoundResult, GhostError> {
        match self.phase {
            RoundPhase::Resolved(result) => Ok(result),
            _ => Err(GhostError::RoundNotResolved),
        }
    }

    /// Apply the current player's move.
    ///
    /// A letter that makes the fragment a word of at least the minimum
    /// length ends the round against the mover. Otherwise the turn passes.
    /// A challenge hands the opponent the task of naming a word.
    pub fn apply_move(&mut self, lexicon: &Lexicon, mv: Move) -> Result<&RoundPhase, GhostError> {
        if !matches!(self.phase, RoundPhase::AwaitingMove { .. }) {
            return Err(GhostError::UnexpectedMove {
                phase: self.phase.name(),
            });
        }

        match mv {
            Move::Letter(letter) => {
                self.fragment.push(letter);
                if lexicon.has_word(&self.fragment, self.min_word_length) {
                    debug!(fragment = %self.fragment, loser = %self.current, "fragment formed a word");
                    self.resolve(self.opponent, self.current, RoundOutcome::FormedWord, None);
                } else {
                    std::mem::swap(&mut self.current, &mut self.opponent);
                    self.phase = RoundPhase::AwaitingMove {
                        player: self.current,
                    };
                }
            }
            Move::Challenge => {
                debug!(fragment = %self.fragment, challenger = %self.current, "challenge issued");
                self.phase = RoundPhase::AwaitingWord {
                    player: self.opponent,
                };
            }
        }

        Ok(&self.phase)
    }

    /// Settle a challenge with the challenged player's answer.
    ///
    /// `None` means the challenged player could not name anything. The
    /// challenge is repelled only by a word that starts with the fragment;
    /// no minimum length applies here.
    pub fn apply_word(&mut self, lexicon: &Lexicon, word: Option<&str>) -> Result<&RoundResult, GhostError> {
        if !matches!(self.phase, RoundPhase::AwaitingWord { .. }) {
            return Err(GhostError::UnexpectedWord {
                phase: self.phase.name(),
            });
        }

        let repelled = word.is_some_and(|w| w.starts_with(self.fragment.as_str()) && lexicon.is_word(w));
        let answer = word.map(str::to_string);

        if repelled {
            self.resolve(self.opponent, self.current, RoundOutcome::LostChallenge, answer);
        } else {
            self.resolve(self.current, self.opponent, RoundOutcome::WonChallenge, answer);
        }

        match &self.phase {
            RoundPhase::Resolved(result) => Ok(result),
            _ => Err(GhostError::RoundNotResolved),
        }
    }

    fn resolve(&mut self, winner: PlayerId, loser: PlayerId, outcome: RoundOutcome, word: Option<String>) {
        self.phase = RoundPhase::Resolved(RoundResult {
            round: self.number,
            first_mover: self.first_mover,
            winner,
            loser,
            outcome,
            fragment: self.fragment.clone(),
            word,
        });
    }
}
