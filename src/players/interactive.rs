//! Player whose decisions come from outside the engine (a terminal, a UI).

use std::collections::VecDeque;

use tracing::warn;

use super::GhostPlayer;
use crate::core::{GhostError, InputError, CHALLENGE};
use crate::game::Move;

/// External source of raw player input.
///
/// Implementations own prompting and reading. Returning `None` means no
/// more input will arrive.
pub trait InputSource: Send {
    /// Read a raw move for `player` at `fragment`.
    fn read_move(&mut self, player: &str, fragment: &str) -> Option<String>;

    /// Read a raw word beginning with `fragment` after `player` was challenged.
    fn read_word(&mut self, player: &str, fragment: &str) -> Option<String>;

    /// Told when a raw move was malformed and will be asked for again.
    fn rejected(&mut self, _player: &str, _error: &InputError) {}
}

/// Player driven by an [`InputSource`].
///
/// Raw moves are parsed with [`Move::parse`]; malformed input is reported
/// back to the source and asked for again. Words are trimmed and
/// lowercased before the game checks them.
pub struct InteractivePlayer<S> {
    name: String,
    source: S,
    challenge: char,
}

impl<S: InputSource> InteractivePlayer<S> {
    /// Create a player reading from `source`.
    pub fn new(name: impl Into<String>, source: S) -> Self {
        Self {
            name: name.into(),
            source,
            challenge: CHALLENGE,
        }
    }

    /// Use a different challenge sentinel.
    #[must_use]
    pub fn with_challenge(mut self, sentinel: char) -> Self {
        self.challenge = sentinel;
        self
    }

    /// The underlying input source.
    pub fn source(&self) -> &S {
        &self.source
    }

    fn closed(&self) -> GhostError {
        GhostError::InputClosed {
            player: self.name.clone(),
        }
    }
}

impl<S: InputSource> GhostPlayer for InteractivePlayer<S> {
    fn name(&self) -> &str {
        &self.name
    }

    fn next_move(&mut self, fragment: &str) -> Result<Move, GhostError> {
        loop {
            let raw = self
                .source
                .read_move(&self.name, fragment)
                .ok_or_else(|| self.closed())?;

            match Move::parse(&raw, fragment, self.challenge) {
                Ok(mv) => return Ok(mv),
                Err(error) => {
                    warn!(player = %self.name, input = %raw, %error, "rejected move input");
                    self.source.rejected(&self.name, &error);
                }
            }
        }
    }

    fn word_for(&mut self, fragment: &str) -> Result<String, GhostError> {
        let raw = self
            .source
            .read_word(&self.name, fragment)
            .ok_or_else(|| self.closed())?;
        Ok(raw.trim().to_lowercase())
    }
}

/// Input source replaying canned answers, for tests and scripted demos.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    moves: VecDeque<String>,
    words: VecDeque<String>,
    rejections: Vec<InputError>,
}

impl ScriptedInput {
    /// Create from move inputs and word inputs, consumed in order.
    pub fn new<M, W>(moves: M, words: W) -> Self
    where
        M: IntoIterator,
        M::Item: Into<String>,
        W: IntoIterator,
        W::Item: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            words: words.into_iter().map(Into::into).collect(),
            rejections: Vec::new(),
        }
    }

    /// Malformed inputs seen so far.
    pub fn rejections(&self) -> &[InputError] {
        &self.rejections
    }

    /// Move inputs not yet consumed.
    pub fn remaining_moves(&self) -> usize {
        self.moves.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_move(&mut self, _player: &str, _fragment: &str) -> Option<String> {
        self.moves.pop_front()
    }

    fn read_word(&mut self, _player: &str, _fragment: &str) -> Option<String> {
        self.words.pop_front()
    }

    fn rejected(&mut self, _player: &str, error: &InputError) {
        self.rejections.push(error.clone());
    }
}
