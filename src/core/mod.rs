//! Core engine types: seats, RNG, configuration, errors.
//!
//! These are the building blocks shared by the lexicon, players and the
//! game state machine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
pub use config::{GhostConfig, CHALLENGE, MIN_WORD_LENGTH};
pub use error::{GhostError, InputError};
