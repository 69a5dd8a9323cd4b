//! # rust-ghost
//!
//! An engine for Ghost, the word game where two players take turns adding
//! letters to a growing fragment. The fragment has to stay the beginning of
//! a word without becoming one; a player who suspects a bluff can challenge.
//!
//! ## Design Principles
//!
//! 1. **Explicit Dictionary**: The `Lexicon` is built once and shared
//!    read-only (`Arc<Lexicon>`). No global state.
//!
//! 2. **Pluggable Players**: Decisions come from a `GhostPlayer` trait
//!    object per seat: a heuristic computer, or an interactive player
//!    reading from an external input source.
//!
//! 3. **No I/O**: The engine never prints or reads. Round results are
//!    returned for the caller to render.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, errors
//! - `lexicon`: Prefix trie
//! - `players`: Player trait and implementations
//! - `game`: Moves, rounds, match state, game driver
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use rust_ghost::{GameBuilder, GhostConfig, Lexicon};
//!
//! let lexicon = Arc::new(Lexicon::from_words(["cat", "cot", "dog", "ghost"]));
//! let mut game = GameBuilder::new(lexicon)
//!     .config(GhostConfig::default().with_seed(7))
//!     .build();
//!
//! let result = game.play_round().unwrap();
//! assert_eq!(game.next_first_mover(), result.loser);
//! ```

pub mod core;
pub mod lexicon;
pub mod players;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerPair,
    GameRng,
    GhostConfig, CHALLENGE, MIN_WORD_LENGTH,
    GhostError, InputError,
};

pub use crate::lexicon::{Letters, Lexicon, LoadStats, TrieNode};

pub use crate::players::{GhostPlayer, HeuristicPlayer, InputSource, InteractivePlayer, ScriptedInput};

pub use crate::game::{
    Game, GameBuilder, MatchState,
    Move, Round, RoundPhase,
    RoundOutcome, RoundResult,
};
