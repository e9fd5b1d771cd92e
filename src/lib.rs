//! # perudo-engine
//!
//! Rules engine and probability-driven computer player for Perudo
//! (Liar's Dice).
//!
//! ## Design Principles
//!
//! 1. **Legal by construction**: `GameState` only changes through
//!    `make_bet` and `call_challenge`, and both validate before mutating.
//!    Rule violations come back as `BettingError` / `IllegalMoveError`.
//!
//! 2. **Exact odds**: a bet's chance of being true is a binomial tail over
//!    the hidden dice, evaluated in log space so large tables never overflow.
//!
//! 3. **Fresh moves**: candidate moves are computed from the state on
//!    demand, never cached alongside it.
//!
//! 4. **One RNG per game**: every `GameState` owns a seeded ChaCha8 stream,
//!    so games run independently and replay from their seed.
//!
//! ## Modules
//!
//! - `core`: seats, cups, bets, RNG, configuration, `GameState`
//! - `rules`: bet ordering and challenge tally
//! - `probability`: chance that a bet holds
//! - `moves`: candidate enumeration and calibration
//! - `policy`: move selection (`SafestMove`)
//! - `error`: rule-violation errors
//!
//! ## Example
//!
//! ```
//! use perudo_engine::new_game;
//!
//! let mut game = new_game(4, 6, 5, Some(42));
//! while game.players_left() > 1 {
//!     game.apply_safest_move().unwrap();
//! }
//! assert!(game.winner().is_some());
//! ```

pub mod core;
pub mod error;
pub mod moves;
pub mod policy;
pub mod probability;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ActiveSeats, Bet, ChallengeOutcome, Cup, GameConfig, GameRng, GameRngState, GameState, Move,
    Player, PlayerId, TurnRecord,
};

pub use crate::error::{BettingError, EngineError, IllegalMoveError};

pub use crate::moves::{
    Calibration, FlatCalibration, LinearCalibration, MoveGenerator, ScoredMove, TableView,
};

pub use crate::policy::{apply_policy, apply_safest_move, select_best_move, MovePolicy, SafestMove};

pub use crate::probability::compute_probability;

/// Deal a new game.
///
/// `seed` pins the dice; `None` draws a seed from OS entropy (still readable
/// afterwards via `GameState::seed`).
///
/// # Panics
///
/// Panics if `player_count` is 0 or `dice_sides < 2`.
#[must_use]
pub fn new_game(player_count: usize, dice_sides: u8, dice_per_player: u8, seed: Option<u64>) -> GameState {
    let mut config = GameConfig::new(player_count)
        .with_dice_sides(dice_sides)
        .with_dice_per_player(dice_per_player);
    config.seed = seed;
    GameState::new(config)
}
