//! Recoverable in-game rule violations.
//!
//! Both error kinds leave the `GameState` untouched, so callers can retry
//! with corrected input. Construction-time contract violations (bad player
//! count, too few die sides) are not represented here: they panic.

use thiserror::Error;

/// A bet rejected by the betting rules.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BettingError {
    #[error("die face must be between 1 and {sides}, got {face}")]
    FaceOutOfRange { face: u8, sides: u8 },

    #[error("bet quantity must be at least 1")]
    QuantityTooLow,

    #[error("quantity {quantity} exceeds the {dice_in_play} dice in play")]
    ExceedsDiceInPlay { quantity: u32, dice_in_play: u32 },

    #[error("cannot change the die face in a palifico round (must bet on {required}, got {face})")]
    PalificoFaceChange { face: u8, required: u8 },

    #[error("must raise either the quantity or the die face")]
    MustRaise,

    #[error("switching to ones requires a quantity of at least {minimum}")]
    OnesTooLow { minimum: u32 },

    #[error("switching away from ones requires a quantity of at least {minimum}")]
    FromOnesTooLow { minimum: u32 },

    #[error("cannot bet on a lower die face than the current bet, except ones")]
    LowerFace,

    #[error("raising the die face requires keeping the quantity at {required}")]
    FaceRaiseQuantity { required: u32 },

    #[error("the game is over")]
    GameOver,
}

/// A move that is not available in the current state.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum IllegalMoveError {
    #[error("cannot call a challenge before anyone has bet")]
    NoBetToChallenge,

    #[error("the game is over")]
    GameOver,

    #[error("no candidate moves to choose from")]
    NoCandidateMoves,
}

/// Any failure from an operation that may either bet or challenge.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Betting(#[from] BettingError),

    #[error(transparent)]
    IllegalMove(#[from] IllegalMoveError),
}

/// Convenience result for operations that can fail either way.
pub type Result<T> = std::result::Result<T, EngineError>;
