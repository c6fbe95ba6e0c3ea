//! Core types: seats, tokens, step counts, players, turns, configuration
//! and errors.
//!
//! These are the building blocks the board, the rules and the driver
//! share. Nothing here decides which token moves; that lives in `rules`.

pub mod config;
pub mod error;
pub mod player;
pub mod seat;
pub mod step;
pub mod turn;

pub use config::GameConfig;
pub use error::GameError;
pub use player::{Completion, Player, Stacking, TokenState};
pub use seat::{Seat, Token};
pub use step::StepCount;
pub use turn::{turns_from_pairs, Turn};
