//! Moves and the record of what happened at the table.
//!
//! A turn is either a challenge ("dudo") of the pending bet or a new, higher
//! bet. Every applied move is recorded as a `TurnRecord`; every resolved
//! challenge additionally produces a `ChallengeOutcome`.

use serde::{Deserialize, Serialize};

use super::bet::Bet;
use super::player::PlayerId;

/// One turn's decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Dispute the pending bet, ending the round.
    Challenge,
    /// Replace the pending bet with a higher one.
    PlaceBet(Bet),
}

impl Move {
    /// Shorthand for `Move::PlaceBet(Bet::new(face, quantity))`.
    #[must_use]
    pub const fn bet(face: u8, quantity: u32) -> Self {
        Move::PlaceBet(Bet::new(face, quantity))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Challenge => write!(f, "Dudo"),
            Move::PlaceBet(bet) => write!(f, "Bet {}", bet),
        }
    }
}

/// An applied move with its position in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who moved.
    pub player: PlayerId,

    /// The move taken.
    pub mv: Move,

    /// Round number when the move was taken.
    pub round: u32,

    /// Sequence number within the round.
    pub sequence: u32,
}

impl TurnRecord {
    #[must_use]
    pub fn new(player: PlayerId, mv: Move, round: u32, sequence: u32) -> Self {
        Self {
            player,
            mv,
            round,
            sequence,
        }
    }
}

/// How a challenge was resolved.
///
/// `probability` is the calibrated success score of the challenge computed
/// for the challenger before the dice were revealed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChallengeOutcome {
    pub challenger: PlayerId,
    pub bettor: PlayerId,
    pub bet: Bet,
    /// Dice on the table that supported the bet.
    pub actual: u32,
    pub loser: PlayerId,
    /// The loser's last die was taken.
    pub eliminated: bool,
    /// The next round is a palifico round.
    pub palifico_next: bool,
    pub probability: f64,
}

impl ChallengeOutcome {
    /// The bet turned out false, so the challenger was right.
    #[must_use]
    pub fn challenger_won(&self) -> bool {
        self.loser == self.bettor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Challenge.to_string(), "Dudo");
        assert_eq!(Move::bet(5, 3).to_string(), "Bet 3 x 5");
    }

    #[test]
    fn test_move_shorthand() {
        assert_eq!(Move::bet(2, 4), Move::PlaceBet(Bet { face: 2, quantity: 4 }));
    }

    #[test]
    fn test_turn_record() {
        let record = TurnRecord::new(PlayerId::new(2), Move::bet(3, 2), 4, 1);

        assert_eq!(record.player, PlayerId::new(2));
        assert_eq!(record.mv, Move::bet(3, 2));
        assert_eq!(record.round, 4);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn test_challenger_won() {
        let outcome = ChallengeOutcome {
            challenger: PlayerId::new(1),
            bettor: PlayerId::new(0),
            bet: Bet::new(4, 6),
            actual: 3,
            loser: PlayerId::new(0),
            eliminated: false,
            palifico_next: false,
            probability: 0.8,
        };
        assert!(outcome.challenger_won());

        let outcome = ChallengeOutcome {
            loser: PlayerId::new(1),
            ..outcome
        };
        assert!(!outcome.challenger_won());
    }

    #[test]
    fn test_move_serialization() {
        let mv = Move::bet(6, 9);
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);

        let record = TurnRecord::new(PlayerId::new(1), Move::Challenge, 2, 3);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<TurnRecord>(&json).unwrap(), record);
    }
}
