//! A player's private dice.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;

/// Multiset of die faces held by one player.
///
/// The size only ever shrinks by one (a lost challenge) or stays the same
/// while the faces are re-rolled at the start of a round. An empty cup means
/// the player is out of the game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cup {
    /// Inline storage covers the standard five-dice cup.
    dice: SmallVec<[u8; 8]>,
}

impl Cup {
    /// Deal a fresh cup of `count` dice.
    pub fn roll_new(count: u8, sides: u8, rng: &mut GameRng) -> Self {
        let dice = (0..count).map(|_| rng.roll_die(sides)).collect();
        Self { dice }
    }

    /// Build a cup from known faces.
    ///
    /// Faces are not range-checked; callers that hand-enter a table (the move
    /// advisor, tests) own that contract.
    #[must_use]
    pub fn from_faces(faces: &[u8]) -> Self {
        Self {
            dice: SmallVec::from_slice(faces),
        }
    }

    /// Re-roll every die, keeping the cup size.
    pub fn reroll(&mut self, sides: u8, rng: &mut GameRng) {
        for die in &mut self.dice {
            *die = rng.roll_die(sides);
        }
    }

    /// Remove one die. Returns false if the cup was already empty.
    pub fn lose_die(&mut self) -> bool {
        self.dice.pop().is_some()
    }

    /// Number of dice held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// True once the player has been eliminated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Read-only view of the faces.
    #[must_use]
    pub fn faces(&self) -> &[u8] {
        &self.dice
    }

    /// Count dice that support a claim on `face`.
    ///
    /// With `ones_wild`, a 1 counts toward any other face.
    #[must_use]
    pub fn count_matching(&self, face: u8, ones_wild: bool) -> u32 {
        let wild = ones_wild && face != 1;
        self.dice
            .iter()
            .filter(|&&d| d == face || (wild && d == 1))
            .count() as u32
    }
}

impl std::fmt::Display for Cup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.dice.as_slice())
    }
}
