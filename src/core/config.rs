//! Table configuration.
//!
//! Seat count, die sides and starting cup size are the only inputs a game
//! needs. An optional seed pins the dice for reproducible runs.

use serde::{Deserialize, Serialize};

/// Default number of faces per die.
pub const DEFAULT_DICE_SIDES: u8 = 6;

/// Default number of dice each player starts with.
pub const DEFAULT_DICE_PER_PLAYER: u8 = 5;

/// Complete game configuration.
///
/// ```
/// use perudo_engine::core::GameConfig;
///
/// let config = GameConfig::new(4).with_seed(7);
/// assert_eq!(config.dice_sides, 6);
/// assert_eq!(config.dice_per_player, 5);
/// assert_eq!(config.total_dice(), 20);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of seats (1-255).
    pub player_count: usize,

    /// Faces per die (2-255). Face 1 is the wildcard.
    pub dice_sides: u8,

    /// Dice dealt to every cup at the start of the game.
    pub dice_per_player: u8,

    /// RNG seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Create a configuration with standard dice.
    ///
    /// # Panics
    ///
    /// Panics if `player_count` is 0 or above 255.
    pub fn new(player_count: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            dice_sides: DEFAULT_DICE_SIDES,
            dice_per_player: DEFAULT_DICE_PER_PLAYER,
            seed: None,
        }
    }

    /// Set the number of die faces.
    ///
    /// # Panics
    ///
    /// Panics if `sides < 2`.
    #[must_use]
    pub fn with_dice_sides(mut self, sides: u8) -> Self {
        assert!(sides >= 2, "Dice must have at least 2 sides");
        self.dice_sides = sides;
        self
    }

    /// Set the starting cup size.
    ///
    /// # Panics
    ///
    /// Panics if `count` is 0.
    #[must_use]
    pub fn with_dice_per_player(mut self, count: u8) -> Self {
        assert!(count > 0, "Players must start with at least 1 die");
        self.dice_per_player = count;
        self
    }

    /// Pin the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Dice on the table at the start of the game.
    #[must_use]
    pub fn total_dice(&self) -> u32 {
        self.player_count as u32 * u32::from(self.dice_per_player)
    }

    /// Re-check the construction contract.
    ///
    /// Fields are public, so a config built by hand or deserialized is
    /// validated again before a game is created from it.
    pub(crate) fn assert_valid(&self) {
        assert!(self.player_count > 0, "Must have at least 1 player");
        assert!(self.player_count <= 255, "At most 255 players supported");
        assert!(self.dice_sides >= 2, "Dice must have at least 2 sides");
        assert!(self.dice_per_player > 0, "Players must start with at least 1 die");
    }
}
