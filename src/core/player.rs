//! Seats and the players sitting in them.
//!
//! ## PlayerId
//!
//! Fixed seat index, 0-based. Seating never changes during a game, so a
//! `PlayerId` stays valid after its player is eliminated.
//!
//! ## Player
//!
//! A seat plus the cup in front of it.

use serde::{Deserialize, Serialize};

use super::cup::Cup;

/// Seat identifier supporting 1-255 players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats for a table of `player_count`.
    ///
    /// ```
    /// use perudo_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// One seat at the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub cup: Cup,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, cup: Cup) -> Self {
        Self { id, cup }
    }

    /// Still holding dice.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.cup.is_empty()
    }

    /// Dice held.
    #[must_use]
    pub fn dice_count(&self) -> u32 {
        self.cup.len() as u32
    }
}
