//! Error types for game setup and turn validation.

use thiserror::Error;

use super::seat::Seat;

/// Errors raised when a run's input breaks a precondition.
///
/// Every variant is a deterministic function of the input. Turn errors are
/// detected before any state is touched, so a failed call leaves the game
/// exactly as it was.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("turn {turn} names seat {seat}, which is not in the game")]
    UnknownSeat { seat: Seat, turn: usize },
    #[error("turn {turn} rolls {roll}; a roll must be at least 1")]
    NonPositiveRoll { roll: i32, turn: usize },
    #[error("turn {turn} rolls {roll}, above the maximum of {max}")]
    RollTooHigh { roll: i32, max: u32, turn: usize },
    #[error("seat {0} is not in the game")]
    SeatNotFound(Seat),
    #[error("invalid seat {0:?}; expected one of A, B, C, D")]
    InvalidSeat(String),
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    #[error("inconsistent game state: {0}")]
    InvalidState(String),
}

impl GameError {
    /// Index of the offending turn, for turn-level errors.
    #[must_use]
    pub fn turn(&self) -> Option<usize> {
        match self {
            GameError::UnknownSeat { turn, .. }
            | GameError::NonPositiveRoll { turn, .. }
            | GameError::RollTooHigh { turn, .. } => Some(*turn),
            GameError::SeatNotFound(_)
            | GameError::InvalidSeat(_)
            | GameError::InvalidConfig(_)
            | GameError::InvalidState(_) => None,
        }
    }
}
