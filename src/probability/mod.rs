//! Chance that a pending bet is true, from one player's point of view.
//!
//! The player knows their own cup; every other die on the table is treated
//! as an independent roll. A hidden die supports a claim on face `f` with
//! probability `1/S`, or `2/S` when `f != 1` and ones are wild.

pub mod binomial;

use crate::core::{Bet, Cup};

pub use binomial::upper_tail;

/// Probability that `bet` holds given `own_cup` and `total_dice` on the table.
///
/// Returns exactly 1.0 when the player's own dice already satisfy the bet.
///
/// ```
/// use perudo_engine::core::{Bet, Cup};
/// use perudo_engine::probability::compute_probability;
///
/// let cup = Cup::from_faces(&[1, 1, 1]);
/// let p = compute_probability(6, &cup, Bet::new(3, 4), false, 6);
/// assert!((p - 19.0 / 27.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn compute_probability(total_dice: u32, own_cup: &Cup, bet: Bet, palifico: bool, sides: u8) -> f64 {
    let hand_matches = own_cup.count_matching(bet.face, !palifico);
    if bet.quantity <= hand_matches {
        return 1.0;
    }

    let needed = bet.quantity - hand_matches;
    let hidden = total_dice.saturating_sub(own_cup.len() as u32);
    upper_tail(hidden, needed, hit_rate(bet.face, palifico, sides))
}

/// Chance a single unseen die supports a claim on `face`.
#[must_use]
pub fn hit_rate(face: u8, palifico: bool, sides: u8) -> f64 {
    let sides = f64::from(sides);
    if face == 1 || palifico {
        1.0 / sides
    } else {
        2.0 / sides
    }
}
