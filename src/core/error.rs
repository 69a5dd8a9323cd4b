//! Error types.
//!
//! Lexicon queries never fail; absence is reported as `false` or `None`.
//! These errors cover player decisions and misuse of the round state
//! machine.

/// Errors raised while driving a round.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GhostError {
    #[error("no word in the lexicon begins with '{fragment}'")]
    NoCompletion { fragment: String },

    #[error("input closed for {player}")]
    InputClosed { player: String },

    #[error("cannot apply a move while the round is {phase}")]
    UnexpectedMove { phase: &'static str },

    #[error("cannot apply a word while the round is {phase}")]
    UnexpectedWord { phase: &'static str },

    #[error("round has not been resolved")]
    RoundNotResolved,
}

/// Malformed raw move input. Interactive players re-ask on these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no input given")]
    Empty,

    #[error("expected a single letter, got '{0}'")]
    NotSingleCharacter(String),

    #[error("'{0}' is not a letter")]
    NotALetter(char),

    #[error("cannot challenge on the first turn")]
    ChallengeOnEmptyFragment,
}
