//! Turn input: which seat rolled what.

use serde::{Deserialize, Serialize};

use super::error::GameError;
use super::seat::Seat;

/// One entry of the turn list.
///
/// The roll is kept signed so that a bad value survives until validation
/// and can be reported instead of silently wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    /// Seat that rolled.
    pub seat: Seat,
    /// Value rolled.
    pub roll: i32,
}

impl Turn {
    /// Create a new turn.
    #[must_use]
    pub const fn new(seat: Seat, roll: i32) -> Self {
        Self { seat, roll }
    }
}

impl From<(Seat, i32)> for Turn {
    fn from((seat, roll): (Seat, i32)) -> Self {
        Self::new(seat, roll)
    }
}

impl TryFrom<(char, i32)> for Turn {
    type Error = GameError;

    fn try_from((letter, roll): (char, i32)) -> Result<Self, Self::Error> {
        Ok(Self::new(Seat::try_from(letter)?, roll))
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rolls {}", self.seat, self.roll)
    }
}

/// Build a turn list from `(letter, roll)` pairs.
///
/// ```
/// use ludo_sim::core::{turns_from_pairs, Seat, Turn};
///
/// let turns = turns_from_pairs(&[('A', 6), ('B', 4)]).unwrap();
/// assert_eq!(turns[1], Turn::new(Seat::B, 4));
/// ```
pub fn turns_from_pairs(pairs: &[(char, i32)]) -> Result<Vec<Turn>, GameError> {
    pairs.iter().map(|&pair| Turn::try_from(pair)).collect()
}
