//! Game driver: asks players for moves, runs rounds, keeps the match.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use super::moves::Move;
use super::outcome::RoundResult;
use super::round::{Round, RoundPhase};
use super::state::MatchState;
use crate::core::{GameRng, GhostConfig, GhostError, PlayerId, PlayerPair};
use crate::lexicon::Lexicon;
use crate::players::{GhostPlayer, HeuristicPlayer};

/// A two-player Ghost match.
///
/// Owns both players and the match state; shares the lexicon read-only.
pub struct Game {
    lexicon: Arc<Lexicon>,
    players: PlayerPair<Box<dyn GhostPlayer>>,
    config: GhostConfig,
    state: MatchState,
}

impl Game {
    /// Create a match between two players.
    pub fn new(lexicon: Arc<Lexicon>, players: [Box<dyn GhostPlayer>; 2], config: GhostConfig) -> Self {
        let players = PlayerPair::from(players);
        let names = PlayerPair::new(
            players[PlayerId::FIRST].name().to_string(),
            players[PlayerId::SECOND].name().to_string(),
        );
        let state = MatchState::new(names, config.first_mover);

        Self {
            lexicon,
            players,
            config,
            state,
        }
    }

    /// Ask `player` for a move at `fragment`.
    pub fn request_move(&mut self, player: PlayerId, fragment: &str) -> Result<Move, GhostError> {
        let mv = self.players[player].next_move(fragment)?;
        debug!(player = %self.state.name(player), fragment, %mv, "move");
        Ok(mv)
    }

    /// Ask the challenged `player` for a word beginning with `fragment`.
    pub fn request_word(&mut self, player: PlayerId, fragment: &str) -> Result<String, GhostError> {
        let word = self.players[player].word_for(fragment)?;
        debug!(player = %self.state.name(player), fragment, word = %word, "word");
        Ok(word)
    }

    /// Play one round to completion and fold it into the match.
    ///
    /// The previous round's loser moves first. A challenged player that
    /// cannot produce any word loses the challenge; other player errors
    /// abort the round and leave the match untouched.
    #[instrument(skip(self), fields(round = self.state.rounds_played() + 1))]
    pub fn play_round(&mut self) -> Result<RoundResult, GhostError> {
        let first = self.state.next_first_mover();
        let mut round = Round::new(
            self.state.rounds_played() + 1,
            first,
            self.config.min_word_length,
        );

        loop {
            match round.phase() {
                RoundPhase::AwaitingMove { player } => {
                    let player = *player;
                    let mv = self.request_move(player, round.fragment())?;
                    round.apply_move(&self.lexicon, mv)?;
                }
                RoundPhase::AwaitingWord { player } => {
                    let player = *player;
                    let word = match self.request_word(player, round.fragment()) {
                        Ok(word) => Some(word),
                        Err(GhostError::NoCompletion { fragment }) => {
                            warn!(player = %self.state.name(player), %fragment, "challenged player has no word");
                            None
                        }
                        Err(e) => return Err(e),
                    };
                    round.apply_word(&self.lexicon, word.as_deref())?;
                }
                RoundPhase::Resolved(_) => break,
            }
        }

        let result = round.into_result()?;
        info!(
            winner = %self.state.name(result.winner),
            loser = %self.state.name(result.loser),
            outcome = ?result.outcome,
            fragment = %result.fragment,
            "round resolved"
        );
        self.state.record(result.clone());
        Ok(result)
    }

    /// Play `count` rounds back to back.
    pub fn play_rounds(&mut self, count: usize) -> Result<Vec<RoundResult>, GhostError> {
        (0..count).map(|_| self.play_round()).collect()
    }

    /// Shared lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Match configuration.
    #[must_use]
    pub fn config(&self) -> &GhostConfig {
        &self.config
    }

    /// Tallies, carryover and history.
    #[must_use]
    pub fn match_state(&self) -> &MatchState {
        &self.state
    }

    /// Display name of the player in `player`'s seat.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        self.state.name(player)
    }

    /// Rounds won by `player`.
    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.state.wins(player)
    }

    /// Who will open the next round.
    #[must_use]
    pub fn next_first_mover(&self) -> PlayerId {
        self.state.next_first_mover()
    }

    /// Rounds completed so far.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.state.rounds_played()
    }

    /// Results of every completed round, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<RoundResult> {
        self.state.history()
    }
}

/// Builder for a [`Game`].
///
/// Seats left empty are filled with [`HeuristicPlayer`]s whose random
/// streams derive from the config seed.
pub struct GameBuilder {
    lexicon: Arc<Lexicon>,
    config: GhostConfig,
    players: [Option<Box<dyn GhostPlayer>>; 2],
}

impl GameBuilder {
    /// Start a builder with the default config and both seats empty.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            config: GhostConfig::default(),
            players: [None, None],
        }
    }

    /// Set the match configuration.
    #[must_use]
    pub fn config(mut self, config: GhostConfig) -> Self {
        self.config = config;
        self
    }

    /// Seat a player.
    #[must_use]
    pub fn player(mut self, seat: PlayerId, player: Box<dyn GhostPlayer>) -> Self {
        self.players[seat.index()] = Some(player);
        self
    }

    /// Build the game.
    pub fn build(self) -> Game {
        let rng = GameRng::new(self.config.seed);
        let [first, second] = self.players;
        let seat = |slot: Option<Box<dyn GhostPlayer>>, id: PlayerId| -> Box<dyn GhostPlayer> {
            slot.unwrap_or_else(|| {
                let stream = rng.for_context(&id.to_string());
                let computer: Box<dyn GhostPlayer> = Box::new(HeuristicPlayer::new(self.lexicon.clone(), stream));
                computer
            })
        };
        let players = [seat(first, PlayerId::FIRST), seat(second, PlayerId::SECOND)];

        Game::new(self.lexicon, players, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundOutcome;
    use crate::players::{InteractivePlayer, ScriptedInput};

    fn lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::from_words(["cat", "cot", "dog", "xylophone"]))
    }

    fn scripted(name: &str, moves: &[&str], words: &[&str]) -> Box<dyn GhostPlayer> {
        Box::new(InteractivePlayer::new(
            name,
            ScriptedInput::new(moves.iter().copied(), words.iter().copied()),
        ))
    }

    #[test]
    fn test_formed_word_round() {
        // Second seat opens by default: bob plays 'c', ann 'a', bob 't'.
        let mut game = Game::new(
            lexicon(),
            [scripted("ann", &["a"], &[]), scripted("bob", &["c", "t"], &[])],
            GhostConfig::default(),
        );

        let result = game.play_round().unwrap();
        assert_eq!(result.outcome, RoundOutcome::FormedWord);
        assert_eq!(result.fragment, "cat");
        assert_eq!(result.loser, PlayerId::SECOND);
        assert_eq!(game.wins(PlayerId::FIRST), 1);
        assert_eq!(game.next_first_mover(), PlayerId::SECOND);
    }

    #[test]
    fn test_lost_challenge_round() {
        let config = GhostConfig::default().with_first_mover(PlayerId::FIRST);
        let mut game = Game::new(
            lexicon(),
            [scripted("ann", &["x", "!"], &[]), scripted("bob", &["y"], &["Xylophone"])],
            config,
        );

        let result = game.play_round().unwrap();
        assert_eq!(result.outcome, RoundOutcome::LostChallenge);
        assert_eq!(result.loser, PlayerId::FIRST);
        assert_eq!(result.word.as_deref(), Some("xylophone"));
        assert_eq!(game.next_first_mover(), PlayerId::FIRST);
    }

    /// Plays 'q' and never knows a word.
    struct Stumped;

    impl GhostPlayer for Stumped {
        fn name(&self) -> &str {
            "stumped"
        }

        fn next_move(&mut self, _fragment: &str) -> Result<Move, GhostError> {
            Ok(Move::Letter('q'))
        }

        fn word_for(&mut self, fragment: &str) -> Result<String, GhostError> {
            Err(GhostError::NoCompletion {
                fragment: fragment.to_string(),
            })
        }
    }

    #[test]
    fn test_no_completion_loses_challenge() {
        let config = GhostConfig::default().with_first_mover(PlayerId::SECOND);
        let mut game = Game::new(lexicon(), [scripted("ann", &["!"], &[]), Box::new(Stumped)], config);

        let result = game.play_round().unwrap();
        assert_eq!(result.outcome, RoundOutcome::WonChallenge);
        assert_eq!(result.winner, PlayerId::FIRST);
        assert_eq!(result.fragment, "q");
        assert_eq!(result.word, None);
    }

    #[test]
    fn test_bluff_is_caught_by_computer() {
        let lex = lexicon();
        let config = GhostConfig::default().with_first_mover(PlayerId::FIRST);
        let computer: Box<dyn GhostPlayer> = Box::new(HeuristicPlayer::seeded(lex.clone(), 1));
        // ann bluffs "q", computer sees a non-prefix and challenges, ann cannot answer.
        let mut game = Game::new(lex, [scripted("ann", &["q"], &["qat"]), computer], config);

        let result = game.play_round().unwrap();
        assert_eq!(result.outcome, RoundOutcome::WonChallenge);
        assert_eq!(result.winner, PlayerId::SECOND);
        assert_eq!(game.name(PlayerId::SECOND), "COMPUTER");
    }

    #[test]
    fn test_input_closed_aborts_round() {
        let mut game = Game::new(
            lexicon(),
            [scripted("ann", &[], &[]), scripted("bob", &["c"], &[])],
            GhostConfig::default(),
        );

        assert_eq!(
            game.play_round(),
            Err(GhostError::InputClosed {
                player: "ann".to_string()
            })
        );
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.wins(PlayerId::SECOND), 0);
    }

    #[test]
    fn test_builder_fills_empty_seats_with_computers() {
        let game = GameBuilder::new(lexicon())
            .player(PlayerId::FIRST, scripted("ann", &[], &[]))
            .build();

        assert_eq!(game.name(PlayerId::FIRST), "ann");
        assert_eq!(game.name(PlayerId::SECOND), HeuristicPlayer::DEFAULT_NAME);
        assert_eq!(game.config(), &GhostConfig::default());
    }

    #[test]
    fn test_request_surface_delegates() {
        let mut game = Game::new(
            lexicon(),
            [scripted("ann", &["D"], &["dog"]), scripted("bob", &[], &[])],
            GhostConfig::default(),
        );

        assert_eq!(game.request_move(PlayerId::FIRST, "").unwrap(), Move::Letter('d'));
        assert_eq!(game.request_word(PlayerId::FIRST, "do").unwrap(), "dog");
    }
}
