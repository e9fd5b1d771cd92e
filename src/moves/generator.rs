//! Candidate moves and their scores.
//!
//! ## Candidates
//!
//! - Round opener: ones at `round(T/S - 1)`, every other face at
//!   `round(2T/S - 1)` (the ones quantity again in palifico), minimum 1.
//! - Pending bet: the challenge, the same face one higher, then the face
//!   switches: every other face at `2q + 1` after a ones bet, otherwise
//!   ones at `ceil(q/2)` and every higher face at `q`.
//! - Palifico with a pending bet: the challenge and the same face one
//!   higher only.
//!
//! Candidates that would exceed the dice on the table are never offered,
//! so every candidate is a legal move.

use std::sync::Arc;

use tracing::trace;

use crate::core::{Bet, Cup, Move};
use crate::probability::compute_probability;

use super::calibration::{Calibration, LinearCalibration};

/// A candidate move with its estimated chance of success.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredMove {
    pub mv: Move,
    /// Calibrated score; may fall slightly outside `[0, 1]`.
    pub probability: f64,
}

impl ScoredMove {
    #[must_use]
    pub const fn new(mv: Move, probability: f64) -> Self {
        Self { mv, probability }
    }
}

/// Everything the deciding player can see.
#[derive(Clone, Copy, Debug)]
pub struct TableView<'a> {
    /// Dice on the table, own cup included.
    pub total_dice: u32,
    pub sides: u8,
    pub own_cup: &'a Cup,
    /// Cup size of the player who made the pending bet.
    pub previous_dice: u32,
    /// Cup size of the player who moves after us.
    pub next_dice: u32,
    pub current_bet: Option<Bet>,
    pub palifico: bool,
}

impl TableView<'_> {
    fn probability(&self, bet: Bet) -> f64 {
        compute_probability(self.total_dice, self.own_cup, bet, self.palifico, self.sides)
    }

    fn own_dice(&self) -> f64 {
        self.own_cup.len().max(1) as f64
    }

    /// `own / previous`, the ratio a challenge is calibrated on.
    fn challenge_ratio(&self) -> f64 {
        self.own_cup.len() as f64 / f64::from(self.previous_dice.max(1))
    }

    /// `next / own`, the ratio a raise is calibrated on.
    fn raise_ratio(&self) -> f64 {
        f64::from(self.next_dice) / self.own_dice()
    }
}

/// Enumerates and scores every legal move.
#[derive(Clone)]
pub struct MoveGenerator {
    calibration: Arc<dyn Calibration>,
}

impl MoveGenerator {
    /// Generator with a custom calibration.
    pub fn new(calibration: impl Calibration + 'static) -> Self {
        Self {
            calibration: Arc::new(calibration),
        }
    }

    /// Generator that scores with raw binomial probabilities.
    #[must_use]
    pub fn uncalibrated() -> Self {
        Self::new(|_: f64| 0.0)
    }

    /// Score of challenging the pending bet, or `None` when nothing is pending.
    #[must_use]
    pub fn challenge_score(&self, view: &TableView<'_>) -> Option<f64> {
        let bet = view.current_bet?;
        Some(1.0 - view.probability(bet) + self.calibration.adjust(view.challenge_ratio()))
    }

    /// All legal moves in enumeration order.
    ///
    /// Returns nothing for a player without dice.
    #[must_use]
    pub fn enumerate_view(&self, view: &TableView<'_>) -> Vec<ScoredMove> {
        if view.own_cup.is_empty() || view.total_dice == 0 {
            return Vec::new();
        }

        let moves = match view.current_bet {
            None => opening_moves(view),
            Some(bet) => self.responses(view, bet),
        };

        trace!(
            candidates = moves.len(),
            palifico = view.palifico,
            total_dice = view.total_dice,
            "enumerated moves"
        );
        moves
    }

    fn responses(&self, view: &TableView<'_>, current: Bet) -> Vec<ScoredMove> {
        let mut moves = Vec::with_capacity(usize::from(view.sides) + 2);

        if let Some(score) = self.challenge_score(view) {
            moves.push(ScoredMove::new(Move::Challenge, score));
        }

        let penalty = self.calibration.adjust(view.raise_ratio());
        let mut raise = |bet: Bet| {
            if bet.quantity <= view.total_dice {
                moves.push(ScoredMove::new(
                    Move::PlaceBet(bet),
                    view.probability(bet) - penalty,
                ));
            }
        };

        raise(Bet::new(current.face, current.quantity + 1));

        if !view.palifico {
            if current.is_ones() {
                let quantity = current.min_quantity_from_ones();
                for face in 2..=view.sides {
                    raise(Bet::new(face, quantity));
                }
            } else {
                raise(Bet::new(1, current.min_ones_quantity()));
                for face in (current.face..view.sides).map(|f| f + 1) {
                    raise(Bet::new(face, current.quantity));
                }
            }
        }

        moves
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(LinearCalibration::default())
    }
}

impl std::fmt::Debug for MoveGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoveGenerator").finish_non_exhaustive()
    }
}

fn opening_moves(view: &TableView<'_>) -> Vec<ScoredMove> {
    let sides = f64::from(view.sides);
    let total = f64::from(view.total_dice);

    let ones_quantity = opening_quantity(total / sides);
    let face_quantity = if view.palifico {
        ones_quantity
    } else {
        opening_quantity(2.0 * total / sides)
    };

    std::iter::once(Bet::new(1, ones_quantity))
        .chain((2..=view.sides).map(|face| Bet::new(face, face_quantity)))
        .map(|bet| ScoredMove::new(Move::PlaceBet(bet), view.probability(bet)))
        .collect()
}

/// One below the expected count, at least 1.
fn opening_quantity(expected: f64) -> u32 {
    let quantity = (expected - 1.0).round();
    if quantity < 1.0 {
        1
    } else {
        quantity as u32
    }
}
