//! Match state carried across rounds.
//!
//! Uses `im::Vector` for the round history so snapshots are O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::outcome::RoundResult;
use crate::core::{PlayerId, PlayerPair};

/// Names, win tallies, turn-order carryover and history for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    names: PlayerPair<String>,
    wins: PlayerPair<u32>,
    prev_winner: PlayerId,
    prev_loser: PlayerId,
    rounds_played: u32,
    history: Vector<RoundResult>,
}

impl MatchState {
    /// Start a match. `first_mover` opens round one.
    pub fn new(names: PlayerPair<String>, first_mover: PlayerId) -> Self {
        Self {
            names,
            wins: PlayerPair::with_value(0),
            prev_winner: first_mover.other(),
            prev_loser: first_mover,
            rounds_played: 0,
            history: Vector::new(),
        }
    }

    /// Fold a resolved round into the match.
    ///
    /// The loser opens the next round and the winner's tally goes up.
    pub fn record(&mut self, result: RoundResult) {
        self.prev_winner = result.winner;
        self.prev_loser = result.loser;
        self.wins[result.winner] += 1;
        self.rounds_played += 1;
        self.history.push_back(result);
    }

    /// Who moves first in the next round.
    #[must_use]
    pub fn next_first_mover(&self) -> PlayerId {
        self.prev_loser
    }

    /// Winner of the last round, or the default second mover before round one.
    #[must_use]
    pub fn previous_winner(&self) -> PlayerId {
        self.prev_winner
    }

    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    #[must_use]
    pub fn wins(&self, player: PlayerId) -> u32 {
        self.wins[player]
    }

    /// Win tallies for both seats.
    #[must_use]
    pub fn scores(&self) -> &PlayerPair<u32> {
        &self.wins
    }

    /// Seat with more wins, `None` when tied.
    #[must_use]
    pub fn leader(&self) -> Option<PlayerId> {
        let (first, second) = (self.wins[PlayerId::FIRST], self.wins[PlayerId::SECOND]);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Some(PlayerId::FIRST),
            std::cmp::Ordering::Less => Some(PlayerId::SECOND),
            std::cmp::Ordering::Equal => None,
        }
    }

    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Results of every round so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundResult> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundOutcome;

    fn result(round: u32, winner: PlayerId) -> RoundResult {
        RoundResult {
            round,
            first_mover: winner,
            winner,
            loser: winner.other(),
            outcome: RoundOutcome::FormedWord,
            fragment: "cat".to_string(),
            word: None,
        }
    }

    fn state() -> MatchState {
        MatchState::new(
            PlayerPair::new("ann".to_string(), "COMPUTER".to_string()),
            PlayerId::SECOND,
        )
    }

    #[test]
    fn test_initial_carryover() {
        let state = state();
        assert_eq!(state.next_first_mover(), PlayerId::SECOND);
        assert_eq!(state.previous_winner(), PlayerId::FIRST);
        assert_eq!(state.rounds_played(), 0);
        assert_eq!(state.leader(), None);
        assert_eq!(state.name(PlayerId::SECOND), "COMPUTER");
    }

    #[test]
    fn test_record_updates_tallies_and_order() {
        let mut state = state();

        state.record(result(1, PlayerId::SECOND));
        assert_eq!(state.next_first_mover(), PlayerId::FIRST);
        assert_eq!(state.wins(PlayerId::SECOND), 1);
        assert_eq!(state.leader(), Some(PlayerId::SECOND));

        state.record(result(2, PlayerId::FIRST));
        state.record(result(3, PlayerId::FIRST));
        assert_eq!(state.next_first_mover(), PlayerId::SECOND);
        assert_eq!(state.scores(), &PlayerPair::new(2, 1));
        assert_eq!(state.leader(), Some(PlayerId::FIRST));
        assert_eq!(state.rounds_played(), 3);
    }

    #[test]
    fn test_history_snapshot_is_independent() {
        let mut state = state();
        state.record(result(1, PlayerId::FIRST));

        let snapshot = state.history().clone();
        state.record(result(2, PlayerId::SECOND));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].round, 2);
    }

    #[test]
    fn test_serialization() {
        let mut state = state();
        state.record(result(1, PlayerId::FIRST));
        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
