//! Challenge tally.

use crate::core::{Bet, Cup};

/// Dice across `cups` that support a claim on `face`.
///
/// Ones are wild unless the round is palifico. The same rule drives the
/// probability estimate, so the estimate and the tally never disagree on
/// what a one is worth.
pub fn count_matches<'a>(cups: impl IntoIterator<Item = &'a Cup>, face: u8, palifico: bool) -> u32 {
    cups.into_iter()
        .map(|cup| cup.count_matching(face, !palifico))
        .sum()
}

/// True when the table holds at least as many matching dice as claimed.
#[must_use]
pub fn bet_holds(actual: u32, bet: Bet) -> bool {
    actual >= bet.quantity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ones_are_wild() {
        let cups = [Cup::from_faces(&[1, 3, 5]), Cup::from_faces(&[3, 1]), Cup::from_faces(&[6])];

        assert_eq!(count_matches(&cups, 3, false), 4);
        assert_eq!(count_matches(&cups, 6, false), 3);
        assert_eq!(count_matches(&cups, 1, false), 2);
    }

    #[test]
    fn test_palifico_ones_not_wild() {
        let cups = [Cup::from_faces(&[1, 3, 5]), Cup::from_faces(&[3, 1])];

        assert_eq!(count_matches(&cups, 3, true), 2);
        assert_eq!(count_matches(&cups, 1, true), 2);
    }

    #[test]
    fn test_bet_holds_at_boundary() {
        assert!(bet_holds(4, Bet::new(3, 4)));
        assert!(bet_holds(5, Bet::new(3, 4)));
        assert!(!bet_holds(3, Bet::new(3, 4)));
    }
}
