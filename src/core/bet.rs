//! The claim currently on the table.

use serde::{Deserialize, Serialize};

/// A claim that at least `quantity` dice across every cup show `face`.
///
/// Outside palifico rounds, ones count toward any other face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bet {
    /// Claimed die face.
    pub face: u8,
    /// Claimed minimum count.
    pub quantity: u32,
}

impl Bet {
    #[must_use]
    pub const fn new(face: u8, quantity: u32) -> Self {
        Self { face, quantity }
    }

    /// True for a claim on the wildcard face.
    #[must_use]
    pub const fn is_ones(self) -> bool {
        self.face == 1
    }

    /// Smallest quantity that may follow this bet on face 1.
    #[must_use]
    pub const fn min_ones_quantity(self) -> u32 {
        self.quantity.div_ceil(2)
    }

    /// Smallest quantity that may follow a ones bet on any other face.
    #[must_use]
    pub const fn min_quantity_from_ones(self) -> u32 {
        self.quantity * 2 + 1
    }
}

impl std::fmt::Display for Bet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.quantity, self.face)
    }
}
