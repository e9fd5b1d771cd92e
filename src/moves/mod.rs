//! Move generation: every legal next move, scored.
//!
//! Scores come from the probability engine plus a pluggable `Calibration`
//! keyed on the dice-count ratio between the decider and a neighbour.

pub mod calibration;
pub mod generator;

pub use crate::core::Move;
pub use calibration::{Calibration, FlatCalibration, LinearCalibration};
pub use generator::{MoveGenerator, ScoredMove, TableView};
