//! Turn order over the seats that still hold dice.
//!
//! `ActiveSeats` keeps the non-eliminated seats in seating order, so finding
//! the next or previous player is a single binary search and a wrap, never
//! a walk over eliminated seats.

use smallvec::SmallVec;

use super::player::PlayerId;

/// Ring of active seats, sorted by seat index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSeats {
    seats: SmallVec<[PlayerId; 8]>,
}

impl ActiveSeats {
    /// All `player_count` seats active.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            seats: PlayerId::all(player_count).collect(),
        }
    }

    /// Number of seats still in play.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    #[must_use]
    pub fn contains(&self, seat: PlayerId) -> bool {
        self.seats.binary_search(&seat).is_ok()
    }

    /// Take a seat out of the rotation.
    pub fn remove(&mut self, seat: PlayerId) {
        if let Ok(pos) = self.seats.binary_search(&seat) {
            self.seats.remove(pos);
        }
    }

    /// First active seat after `seat` in clockwise order.
    ///
    /// `seat` itself need not be active (e.g. a just-eliminated player).
    /// If `seat` is the only active seat, it is returned.
    #[must_use]
    pub fn next_after(&self, seat: PlayerId) -> Option<PlayerId> {
        let pos = self.seats.partition_point(|&s| s <= seat);
        self.seats.get(pos).or_else(|| self.seats.first()).copied()
    }

    /// Last active seat before `seat` in clockwise order.
    #[must_use]
    pub fn previous_before(&self, seat: PlayerId) -> Option<PlayerId> {
        let pos = self.seats.partition_point(|&s| s < seat);
        if pos == 0 {
            self.seats.last().copied()
        } else {
            Some(self.seats[pos - 1])
        }
    }

    /// Iterate active seats in seating order.
    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats.iter().copied()
    }
}
