//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Ghost is always played by exactly two seats, so `PlayerId` is a
//! 0-or-1 index with an `other()` helper for turn rotation.
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId` (names, win tallies,
//! player implementations).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier: `PlayerId(0)` or `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first seat.
    pub const FIRST: PlayerId = PlayerId(0);
    /// The second seat.
    pub const SECOND: PlayerId = PlayerId(1);

    /// Create a player ID from a seat index.
    ///
    /// Panics if `seat` is not 0 or 1.
    #[must_use]
    pub const fn new(seat: u8) -> Self {
        assert!(seat < 2, "Ghost has exactly two seats");
        Self(seat)
    }

    /// Get the seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing seat.
    ///
    /// ```
    /// use rust_ghost::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::FIRST.other(), PlayerId::SECOND);
    /// assert_eq!(PlayerId::SECOND.other(), PlayerId::FIRST);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        Self(1 - self.0)
    }

    /// Both seats, in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [Self::FIRST, Self::SECOND].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}

/// One value per seat.
///
/// ```
/// use rust_ghost::core::{PlayerId, PlayerPair};
///
/// let mut wins = PlayerPair::with_value(0u32);
/// wins[PlayerId::SECOND] += 1;
/// assert_eq!(wins[PlayerId::FIRST], 0);
/// assert_eq!(wins[PlayerId::SECOND], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    slots: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create from the first and second seat values.
    pub fn new(first: T, second: T) -> Self {
        Self {
            slots: [first, second],
        }
    }

    /// Create with the same value in both seats.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(value.clone(), value)
    }

    /// Get a reference to a seat's value.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.slots[player.index()]
    }

    /// Get a mutable reference to a seat's value.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.slots[player.index()]
    }
}

impl<T> From<[T; 2]> for PlayerPair<T> {
    fn from(slots: [T; 2]) -> Self {
        Self { slots }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
