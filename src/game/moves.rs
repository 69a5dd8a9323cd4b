//! A single turn: add a letter or challenge.

use serde::{Deserialize, Serialize};

use crate::core::InputError;

/// What a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Append a lowercase letter to the fragment.
    Letter(char),
    /// Claim the fragment cannot be extended into a word.
    Challenge,
}

impl Move {
    /// Parse raw player input.
    ///
    /// Accepts exactly one ASCII letter (lowercased) or the `challenge`
    /// sentinel. A challenge on an empty fragment is refused.
    ///
    /// ```
    /// use rust_ghost::game::Move;
    ///
    /// assert_eq!(Move::parse(" Q ", "", '!'), Ok(Move::Letter('q')));
    /// assert_eq!(Move::parse("!", "ca", '!'), Ok(Move::Challenge));
    /// assert!(Move::parse("!", "", '!').is_err());
    /// ```
    pub fn parse(raw: &str, fragment: &str, challenge: char) -> Result<Move, InputError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let ch = match (chars.next(), chars.next()) {
            (None, _) => return Err(InputError::Empty),
            (Some(ch), None) => ch,
            (Some(_), Some(_)) => return Err(InputError::NotSingleCharacter(trimmed.to_string())),
        };

        if ch == challenge {
            if fragment.is_empty() {
                Err(InputError::ChallengeOnEmptyFragment)
            } else {
                Ok(Move::Challenge)
            }
        } else if ch.is_ascii_alphabetic() {
            Ok(Move::Letter(ch.to_ascii_lowercase()))
        } else {
            Err(InputError::NotALetter(ch))
        }
    }

    /// The letter, if this is a letter move.
    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Move::Letter(ch) => Some(ch),
            Move::Challenge => None,
        }
    }

    /// True for a challenge.
    #[must_use]
    pub fn is_challenge(self) -> bool {
        matches!(self, Move::Challenge)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Letter(ch) => write!(f, "{ch}"),
            Move::Challenge => write!(f, "challenge"),
        }
    }
}
