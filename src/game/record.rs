//! Turn history and the final report.

use serde::{Deserialize, Serialize};

use crate::board::Space;
use crate::core::{Seat, Token};
use crate::rules::{Choice, MoveOutcome, PriorityRule};

/// An applied turn with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Explaining why a token moved (`choice.rule`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 0-based position in the turn list.
    pub index: usize,

    /// Seat that rolled.
    pub seat: Seat,

    /// Validated roll.
    pub roll: u32,

    /// Token picked and the rule that picked it.
    pub choice: Choice,

    /// What the move did.
    pub outcome: MoveOutcome,
}

impl TurnRecord {
    /// Token the priority rules picked.
    #[must_use]
    pub fn token(&self) -> Token {
        self.choice.token
    }

    /// Rule that picked the token.
    #[must_use]
    pub fn rule(&self) -> PriorityRule {
        self.choice.rule
    }
}

/// Final positions after a run.
///
/// `spaces` and `labels` list each seat's P then Q, seats in the order
/// they were first named.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Seats in play order.
    pub seats: Vec<Seat>,

    /// Token spaces, two per seat.
    pub spaces: Vec<Space>,

    /// Token labels, two per seat.
    pub labels: Vec<String>,

    /// Seats with both tokens finished.
    pub finished: Vec<Seat>,

    /// Number of turns applied.
    pub turns_played: usize,
}

impl Report {
    /// Labels for one seat's (P, Q) tokens, if the seat played.
    #[must_use]
    pub fn seat_labels(&self, seat: Seat) -> Option<(&str, &str)> {
        let i = self.seats.iter().position(|&s| s == seat)?;
        Some((&self.labels[2 * i], &self.labels[2 * i + 1]))
    }
}
