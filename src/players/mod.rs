//! Player decision policies.
//!
//! `GhostPlayer` is the capability the game drives each turn. Two
//! variants are provided:
//! - `HeuristicPlayer`: a computer player that walks the lexicon
//! - `InteractivePlayer`: forwards decisions to an external `InputSource`
//!
//! The variant for each seat is chosen when the `Game` is built.

mod heuristic;
mod interactive;

pub use heuristic::HeuristicPlayer;
pub use interactive::{InputSource, InteractivePlayer, ScriptedInput};

use crate::core::GhostError;
use crate::game::Move;

/// A participant in a Ghost match.
pub trait GhostPlayer: Send {
    /// Display name.
    fn name(&self) -> &str;

    /// Decide the next move given the current fragment.
    fn next_move(&mut self, fragment: &str) -> Result<Move, GhostError>;

    /// Produce a word beginning with `fragment`.
    ///
    /// Only called when this player has been challenged. The game checks
    /// the answer; an answer that is not a word or does not start with the
    /// fragment loses the challenge.
    fn word_for(&mut self, fragment: &str) -> Result<String, GhostError>;
}
