//! The rule engine.
//!
//! - `priority`: picks which token takes a roll
//! - `movement`: applies the roll, including stacking and captures
//!
//! Both work on a borrowed slice of players owned by the caller (normally
//! `Game`) and find the acting seat by its `Seat`.

pub mod movement;
pub mod priority;

pub use movement::{advance, Capture, Move, MoveOutcome};
pub use priority::{choose, decide, prospective_space, Choice, PriorityRule};

use crate::core::{GameError, Player, Seat};

/// Position of `seat` in `players`.
pub(crate) fn seat_index(players: &[Player], seat: Seat) -> Result<usize, GameError> {
    players
        .iter()
        .position(|p| p.seat() == seat)
        .ok_or(GameError::SeatNotFound(seat))
}
