//! Core table types: seats, cups, bets, RNG, configuration and the game
//! state machine.
//!
//! Everything here is plain data plus the one stateful type, `GameState`.
//! Rule checks live in `rules`, scoring in `probability` and `moves`.

pub mod action;
pub mod bet;
pub mod config;
pub mod cup;
pub mod player;
pub mod rng;
pub mod seats;
pub mod state;

pub use action::{ChallengeOutcome, Move, TurnRecord};
pub use bet::Bet;
pub use config::{GameConfig, DEFAULT_DICE_PER_PLAYER, DEFAULT_DICE_SIDES};
pub use cup::Cup;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, GameRngState};
pub use seats::ActiveSeats;
pub use state::GameState;
