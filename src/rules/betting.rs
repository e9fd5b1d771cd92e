//! Bet legality.
//!
//! A new bet must be on a real face, fit within the dice on the table and
//! outrank the pending bet:
//!
//! | pending | new face | required quantity |
//! |---|---|---|
//! | face 1 | 1 | greater than pending |
//! | face 1 | other | at least `2q + 1` |
//! | other | 1 | at least `ceil(q / 2)` |
//! | other | same | greater than pending |
//! | other | higher | equal to pending |
//! | other | lower (not 1) | never |
//!
//! In a palifico round the face is locked to the pending bet's face.

use crate::core::Bet;
use crate::error::BettingError;

/// Check `bet` against the table.
pub fn validate_bet(
    bet: Bet,
    current: Option<Bet>,
    dice_in_play: u32,
    sides: u8,
    palifico: bool,
) -> Result<(), BettingError> {
    if bet.face < 1 || bet.face > sides {
        return Err(BettingError::FaceOutOfRange { face: bet.face, sides });
    }
    if bet.quantity < 1 {
        return Err(BettingError::QuantityTooLow);
    }
    if bet.quantity > dice_in_play {
        return Err(BettingError::ExceedsDiceInPlay {
            quantity: bet.quantity,
            dice_in_play,
        });
    }

    let Some(current) = current else {
        return Ok(());
    };

    if palifico && bet.face != current.face {
        return Err(BettingError::PalificoFaceChange {
            face: bet.face,
            required: current.face,
        });
    }

    validate_raise(bet, current)
}

/// Check that `bet` outranks `current`, ignoring table limits.
pub fn validate_raise(bet: Bet, current: Bet) -> Result<(), BettingError> {
    if bet.face == current.face {
        return if bet.quantity > current.quantity {
            Ok(())
        } else {
            Err(BettingError::MustRaise)
        };
    }

    match (current.is_ones(), bet.is_ones()) {
        (true, _) => {
            let minimum = current.min_quantity_from_ones();
            if bet.quantity < minimum {
                Err(BettingError::FromOnesTooLow { minimum })
            } else {
                Ok(())
            }
        }
        (false, true) => {
            let minimum = current.min_ones_quantity();
            if bet.quantity < minimum {
                Err(BettingError::OnesTooLow { minimum })
            } else {
                Ok(())
            }
        }
        _ => {
            if bet.face < current.face {
                Err(BettingError::LowerFace)
            } else if bet.quantity != current.quantity {
                Err(BettingError::FaceRaiseQuantity {
                    required: current.quantity,
                })
            } else {
                Ok(())
            }
        }
    }
}
