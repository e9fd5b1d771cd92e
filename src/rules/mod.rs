//! Perudo rules: what may be bet, and how a challenge is tallied.
//!
//! These are pure functions over table facts. `GameState` calls them before
//! mutating anything, and the move generator uses the same ordering rules so
//! that every candidate it offers is legal.

pub mod betting;
pub mod challenge;

pub use betting::{validate_bet, validate_raise};
pub use challenge::{bet_holds, count_matches};
