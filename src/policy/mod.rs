//! Move selection for computer players.
//!
//! A `MovePolicy` picks one candidate from the generator's scored list.
//! `SafestMove` is the only built-in policy: it takes the highest score,
//! breaking ties in favour of the candidate enumerated last.

use tracing::trace;

use crate::core::{GameState, Move};
use crate::error::{IllegalMoveError, Result};
use crate::moves::ScoredMove;

/// Chooses a move from scored candidates.
pub trait MovePolicy: Send + Sync {
    /// Pick a candidate, or `None` if the list is empty.
    fn select(&self, candidates: &[ScoredMove]) -> Option<ScoredMove>;
}

/// Highest score wins; later candidates win ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct SafestMove;

impl MovePolicy for SafestMove {
    fn select(&self, candidates: &[ScoredMove]) -> Option<ScoredMove> {
        let mut best: Option<ScoredMove> = None;
        for &candidate in candidates {
            match best {
                Some(current) if candidate.probability < current.probability => {}
                _ => best = Some(candidate),
            }
        }
        best
    }
}

/// Best move by score, using `SafestMove`.
#[must_use]
pub fn select_best_move(candidates: &[ScoredMove]) -> Option<Move> {
    SafestMove.select(candidates).map(|c| c.mv)
}

/// Let `policy` choose and play the current player's move.
///
/// Returns the challenge score if a challenge was played, `None` for a bet.
pub fn apply_policy(state: &mut GameState, policy: &dyn MovePolicy) -> Result<Option<f64>> {
    if state.is_over() {
        return Err(IllegalMoveError::GameOver.into());
    }

    let candidates = state.enumerate_moves();
    let choice = policy
        .select(&candidates)
        .ok_or(IllegalMoveError::NoCandidateMoves)?;

    trace!(
        player = %state.current_player(),
        choice = %choice.mv,
        probability = choice.probability,
        "selected move"
    );

    state.apply_move(choice.mv)
}

/// Play the highest-scoring move for the current player.
pub fn apply_safest_move(state: &mut GameState) -> Result<Option<f64>> {
    apply_policy(state, &SafestMove)
}

impl GameState {
    /// Play the highest-scoring move for the current player.
    ///
    /// Returns the challenge score if a challenge was played, `None` for a bet.
    pub fn apply_safest_move(&mut self) -> Result<Option<f64>> {
        apply_safest_move(self)
    }
}
