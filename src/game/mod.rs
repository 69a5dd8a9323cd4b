//! Ghost game logic: moves, the round state machine, match state and the
//! driver that asks players for decisions.
//!
//! Players alternate adding letters to a shared fragment. Spelling a word
//! of at least `min_word_length` letters loses the round. Instead of
//! adding a letter a player may challenge; the opponent must then name a
//! word beginning with the fragment or lose.

mod engine;
mod moves;
mod outcome;
mod round;
mod state;

pub use engine::{Game, GameBuilder};
pub use moves::Move;
pub use outcome::{RoundOutcome, RoundResult};
pub use round::{Round, RoundPhase};
pub use state::MatchState;
